//! Persistence Module
//!
//! Translates between the persisted JSON document and the in-memory ordered
//! collection of student records.
//!
//! ## Core Concepts
//! - **Whole-document cycles**: `load` reads and parses the entire backing
//!   file; `save` rewrites it from scratch. Nothing is cached between calls,
//!   so the file on disk is the only source of truth.
//! - **Lazy materialization**: a missing backing file is the empty
//!   collection, not an error.
//! - **Write locking**: off by default. `with_serialized_writes` threads
//!   every mutating request cycle through a single-writer lock.

pub mod error;
pub mod file;

#[cfg(test)]
mod tests;
