use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::sync::{Mutex, MutexGuard};

use super::error::StoreError;
use crate::students::types::Student;

/// File-backed accessor for the student collection.
///
/// Every operation works on the whole collection: [`load`](Self::load) reads
/// and parses the entire backing file, [`save`](Self::save) rewrites it from
/// scratch. There is no atomic rename and no partial-write protection; a
/// crash mid-write can corrupt the backing file.
pub struct StudentStore {
    path: PathBuf,
    write_lock: Option<Mutex<()>>,
}

impl StudentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: None,
        }
    }

    /// Serialize mutating request cycles behind a single-writer lock.
    ///
    /// Without the lock, two overlapping load-mutate-save cycles race and the
    /// later save overwrites the earlier one's effect. Off by default.
    pub fn with_serialized_writes(mut self) -> Self {
        self.write_lock = Some(Mutex::new(()));
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire the single-writer lock, if enabled.
    ///
    /// Mutating handlers hold the returned guard across their whole
    /// load-mutate-save cycle. `None` when the store runs unlocked.
    pub async fn write_guard(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.write_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        }
    }

    /// Read the full collection from the backing file.
    ///
    /// A missing file is the default empty state. A leading U+FEFF left
    /// behind by some editors is stripped before parsing.
    pub async fn load(&self) -> Result<Vec<Student>, StoreError> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    "{} does not exist, starting with an empty collection",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
        serde_json::from_str(text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Overwrite the backing file with the full collection, pretty-printed
    /// with 2-space indentation.
    pub async fn save(&self, students: &[Student]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(students)
            .map_err(|source| StoreError::Serialize { source })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }
}
