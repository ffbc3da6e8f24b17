use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::ops;
use super::types::Student;
use crate::store::error::StoreError;
use crate::store::file::StudentStore;

const STUDENT_NOT_FOUND: &str = "Student not found";
const SERVER_ERROR: &str = "Server error";

/// POST /api/students: append a new record unconditionally.
///
/// No uniqueness check on `sid`: creating a duplicate identifier is allowed.
pub async fn handle_create_student(
    Extension(store): Extension<Arc<StudentStore>>,
    Json(student): Json<Student>,
) -> Result<(StatusCode, &'static str), (StatusCode, String)> {
    let _guard = store.write_guard().await;

    let mut students = store.load().await.map_err(create_error)?;
    students.push(student);
    store.save(&students).await.map_err(create_error)?;

    Ok((StatusCode::CREATED, "Student added successfully"))
}

fn create_error(err: StoreError) -> (StatusCode, String) {
    tracing::error!("Failed to add student: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Error processing student data: {}", err),
    )
}

/// GET /api/students: the full collection, in stored order.
pub async fn handle_list_students(
    Extension(store): Extension<Arc<StudentStore>>,
) -> Result<Json<Vec<Student>>, (StatusCode, &'static str)> {
    let students = store.load().await.map_err(|err| {
        tracing::error!("Failed to load students: {}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Error fetching student data",
        )
    })?;

    Ok(Json(students))
}

/// GET /api/students/search?field=value: first record whose field matches,
/// case-insensitively. The field name is taken from the first query
/// parameter supplied.
pub async fn handle_search_student(
    Extension(store): Extension<Arc<StudentStore>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<Student>, (StatusCode, &'static str)> {
    let Some((field, value)) = params.into_iter().next() else {
        tracing::warn!("Search request carried no query parameter");
        return Err((StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR));
    };

    let students = store.load().await.map_err(|err| {
        tracing::error!("Failed to load students for search: {}", err);
        (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR)
    })?;

    match ops::find_by_field(&students, &field, &value) {
        Ok(Some(student)) => Ok(Json(student.clone())),
        Ok(None) => Err((StatusCode::NOT_FOUND, STUDENT_NOT_FOUND)),
        Err(err) => {
            tracing::error!("Search failed: {}", err);
            Err((StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR))
        }
    }
}

/// PUT /api/students/:sid: wholesale replacement of the matching record.
///
/// Callers resend the full record; only `subjects` is carried forward when
/// the replacement leaves it empty (see `ops::replace_by_sid`).
pub async fn handle_update_student(
    Path(sid): Path<String>,
    Extension(store): Extension<Arc<StudentStore>>,
    Json(replacement): Json<Student>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    let _guard = store.write_guard().await;

    let mut students = store.load().await.map_err(server_error)?;

    if !ops::replace_by_sid(&mut students, &sid, replacement) {
        return Err((StatusCode::NOT_FOUND, STUDENT_NOT_FOUND));
    }

    store.save(&students).await.map_err(server_error)?;
    Ok("Student updated successfully")
}

/// DELETE /api/students/:sid: remove every record with the identifier.
///
/// Designed for one match but removes all of them. Persists only when the
/// collection shrank; a miss leaves the backing file untouched.
pub async fn handle_delete_student(
    Path(sid): Path<String>,
    Extension(store): Extension<Arc<StudentStore>>,
) -> Result<&'static str, (StatusCode, &'static str)> {
    let _guard = store.write_guard().await;

    let mut students = store.load().await.map_err(server_error)?;

    if ops::remove_by_sid(&mut students, &sid) == 0 {
        return Err((StatusCode::NOT_FOUND, STUDENT_NOT_FOUND));
    }

    store.save(&students).await.map_err(server_error)?;
    Ok("Student deleted successfully")
}

fn server_error(err: StoreError) -> (StatusCode, &'static str) {
    tracing::error!("Store operation failed: {}", err);
    (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR)
}
