//! Student Records Service Library
//!
//! This library crate defines the core modules that make up the service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three small subsystems:
//!
//! - **`store`**: The persistence layer. Reads and rewrites the whole record
//!   collection as one pretty-printed JSON document, with an optional
//!   single-writer lock for deployments that want mutations serialized.
//! - **`students`**: The request layer. Axum handlers for the CRUD + search
//!   API, plus the pure collection transformations they apply.
//! - **`pages`**: The browser-facing entry pages, embedded at compile time.

pub mod pages;
pub mod store;
pub mod students;
