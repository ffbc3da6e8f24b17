use std::net::SocketAddr;
use std::sync::Arc;

use axum::routing::{get, put};
use axum::{Extension, Router};
use student_registry::pages::handlers::{handle_insert_page, handle_show_page};
use student_registry::store::file::StudentStore;
use student_registry::students::handlers::{
    handle_create_student, handle_delete_student, handle_list_students, handle_search_student,
    handle_update_student,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = "127.0.0.1:3000".parse()?;
    let mut data_file = "StudentsData.json".to_string();
    let mut serialize_writes = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                bind_addr = args[i + 1].parse()?;
                i += 2;
            }
            "--data-file" => {
                data_file = args[i + 1].clone();
                i += 2;
            }
            "--serialize-writes" => {
                serialize_writes = true;
                i += 1;
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: {} [--bind <addr:port>] [--data-file <path>] [--serialize-writes]",
                    args[0]
                );
                std::process::exit(0);
            }
            _ => {
                i += 1;
            }
        }
    }

    // 1. Persistence layer:
    let mut store = StudentStore::new(&data_file);
    if serialize_writes {
        tracing::info!("Single-writer mode: mutating requests are serialized");
        store = store.with_serialized_writes();
    }
    let store = Arc::new(store);
    tracing::info!("Backing file: {}", store.path().display());

    // 2. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_insert_page))
        .route("/show-students", get(handle_show_page))
        .route(
            "/api/students",
            get(handle_list_students).post(handle_create_student),
        )
        .route("/api/students/search", get(handle_search_student))
        .route(
            "/api/students/:sid",
            put(handle_update_student).delete(handle_delete_student),
        )
        .layer(Extension(store));

    // 3. Start HTTP server:
    tracing::info!("Server is running on http://{}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
