//! Student Record Type
//!
//! Records are schemaless: callers decide which fields exist and the store
//! round-trips them untouched. Only two fields get special treatment: `sid`
//! identifies a record for update/delete, and `subjects` is carried forward
//! across updates that leave it empty.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding a record's identifier.
pub const SID_FIELD: &str = "sid";

/// Field carried forward on update when the replacement leaves it empty.
pub const SUBJECTS_FIELD: &str = "subjects";

/// A single student record: an arbitrary mapping from field name to value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Student(pub Map<String, Value>);

impl Student {
    /// The record's identifier, when present and a string.
    ///
    /// Identifier matching is strict: a record whose `sid` is a number never
    /// matches a path parameter.
    pub fn sid(&self) -> Option<&str> {
        self.0.get(SID_FIELD).and_then(Value::as_str)
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}
