//! Student Records Module
//!
//! The request layer of the service: HTTP handlers for the CRUD + search API
//! and the pure transformations they apply to the loaded collection.
//!
//! ## Overview
//! Every handler runs one complete cycle against the whole collection:
//! load it via the store, apply a single in-memory transformation (append,
//! find, replace, filter), persist the result if it mutated, respond.
//! Nothing is held in memory between requests.
//!
//! ## Submodules
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`ops`**: Pure find/replace/remove logic over the collection.
//! - **`types`**: The schemaless `Student` record type.

pub mod handlers;
pub mod ops;
pub mod types;
