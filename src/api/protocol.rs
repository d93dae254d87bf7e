//! HTTP Surface Definitions
//!
//! Route paths and the wire format of error responses. Success responses
//! carry items (or arrays of items) directly; every failure carries a
//! single-field `{"error": ...}` body.

use serde::{Deserialize, Serialize};

// --- Routes ---

/// Collection endpoint: GET lists, POST creates.
pub const ENDPOINT_COLLECTION: &str = "/shopping-list";
/// Single-item endpoint: PUT merges, DELETE removes. The id is the final
/// path segment.
pub const ENDPOINT_ITEM: &str = "/shopping-list/:id";

// --- Error messages ---

/// Request body was not decodable JSON (or not a JSON object).
pub const MSG_INVALID_JSON: &str = "Invalid JSON data";
/// The referenced id matched no stored item.
pub const MSG_ITEM_NOT_FOUND: &str = "Item not found";
/// No route matched the request method and path.
pub const MSG_ROUTE_NOT_FOUND: &str = "Not Found";
/// Storage could not be read or written.
pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

// --- Data Transfer Objects ---

/// Body of every failure response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
