use axum::response::Html;

/// GET /: the record entry form.
pub async fn handle_insert_page() -> Html<&'static str> {
    Html(include_str!("insert-student.html"))
}

/// GET /show-students: the collection listing page.
pub async fn handle_show_page() -> Html<&'static str> {
    Html(include_str!("show-students.html"))
}
