use serde_json::Value;
use thiserror::Error;

use super::types::{Student, SUBJECTS_FIELD};

/// A search touched a field that cannot be lower-cased for comparison.
///
/// Only string fields take part in search; a record whose searched field is
/// absent or non-string aborts the scan.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("field `{field}` is missing or not a string and cannot be compared")]
pub struct FieldCompareError {
    pub field: String,
}

/// Case-insensitive first match on an arbitrary field.
///
/// Scans in collection order; the first record whose field equals the search
/// value (both lower-cased) wins. A record reached before any match whose
/// field is absent or non-string yields [`FieldCompareError`].
pub fn find_by_field<'a>(
    students: &'a [Student],
    field: &str,
    value: &str,
) -> Result<Option<&'a Student>, FieldCompareError> {
    let needle = value.to_lowercase();

    for student in students {
        match student.field(field) {
            Some(Value::String(candidate)) => {
                if candidate.to_lowercase() == needle {
                    return Ok(Some(student));
                }
            }
            _ => {
                return Err(FieldCompareError {
                    field: field.to_string(),
                })
            }
        }
    }

    Ok(None)
}

/// Replace the record whose `sid` matches, wholesale.
///
/// Existing fields are discarded, not merged. The one exception: when the
/// replacement's `subjects` is empty (missing, null, empty array or empty
/// string), the outgoing record's `subjects` is copied in first, so an edit
/// form that never collected the field does not erase it.
///
/// Returns `false` when no record matches.
pub fn replace_by_sid(students: &mut [Student], sid: &str, mut replacement: Student) -> bool {
    let Some(index) = students.iter().position(|s| s.sid() == Some(sid)) else {
        return false;
    };

    if subjects_is_empty(&replacement) {
        if let Some(subjects) = students[index].field(SUBJECTS_FIELD) {
            replacement
                .0
                .insert(SUBJECTS_FIELD.to_string(), subjects.clone());
        }
    }

    students[index] = replacement;
    true
}

/// Remove every record whose `sid` matches, preserving the relative order of
/// survivors. Returns how many records were removed.
pub fn remove_by_sid(students: &mut Vec<Student>, sid: &str) -> usize {
    let before = students.len();
    students.retain(|s| s.sid() != Some(sid));
    before - students.len()
}

fn subjects_is_empty(student: &Student) -> bool {
    match student.field(SUBJECTS_FIELD) {
        None | Some(Value::Null) => true,
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::String(text)) => text.is_empty(),
        Some(_) => false,
    }
}
