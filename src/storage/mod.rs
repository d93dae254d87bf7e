//! File-Backed Storage Module
//!
//! Owns the single JSON document that holds the entire shopping list.
//!
//! ## Core Concepts
//! - **Whole-document access**: the collection is always read and written in
//!   full. There is no partial update, no index, no cache.
//! - **Bootstrap**: the data directory and an empty-array document are
//!   created on startup if absent, and never overwritten if present.
//! - **No locking**: each request opens, reads/writes, and closes the file
//!   independently. Interleaved read-modify-write cycles can lose updates.

pub mod file;
