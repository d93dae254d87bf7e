//! Shopping List Service Library
//!
//! This library crate defines the core modules of the shopping list service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of three layers, leaf to root:
//!
//! - **`storage`**: The persistence layer. Owns the single JSON document on
//!   disk and exposes whole-document read and write operations.
//! - **`items`**: The domain layer. Implements the four CRUD operations
//!   (list, create, update, delete) as read-modify-write cycles over the
//!   storage layer.
//! - **`api`**: The HTTP layer. Maps routes to repository operations,
//!   decodes request bodies, and assigns status codes.

pub mod api;
pub mod error;
pub mod items;
pub mod storage;
