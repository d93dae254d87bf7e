use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Map, Value};
use std::sync::Arc;

use super::protocol::{
    ErrorBody, MSG_INTERNAL_ERROR, MSG_INVALID_JSON, MSG_ITEM_NOT_FOUND, MSG_ROUTE_NOT_FOUND,
};
use crate::error::Error;
use crate::items::repository::ItemRepository;

pub async fn handle_list_items(Extension(repo): Extension<Arc<ItemRepository>>) -> Response {
    match repo.list() {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(err) => storage_failure("list", &err),
    }
}

pub async fn handle_create_item(
    Extension(repo): Extension<Arc<ItemRepository>>,
    body: String,
) -> Response {
    let fields: Map<String, Value> = match serde_json::from_str(&body) {
        Ok(fields) => fields,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, MSG_INVALID_JSON),
    };

    match repo.create(&fields) {
        Ok(item) => (StatusCode::CREATED, Json(item)).into_response(),
        Err(Error::Validation(message)) => error_response(StatusCode::BAD_REQUEST, &message),
        Err(err) => storage_failure("create", &err),
    }
}

pub async fn handle_update_item(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<ItemRepository>>,
    body: String,
) -> Response {
    // Body parsing comes first: an unparsable body is a 400 even when the
    // id would not have matched anything.
    let fields: Map<String, Value> = match serde_json::from_str(&body) {
        Ok(fields) => fields,
        Err(_) => return error_response(StatusCode::BAD_REQUEST, MSG_INVALID_JSON),
    };

    // A non-numeric segment can never equal a stored id, so it surfaces as
    // not-found rather than a distinct parse error.
    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(_) => return error_response(StatusCode::NOT_FOUND, MSG_ITEM_NOT_FOUND),
    };

    match repo.update(id, &fields) {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(Error::NotFound) => error_response(StatusCode::NOT_FOUND, MSG_ITEM_NOT_FOUND),
        Err(err) => storage_failure("update", &err),
    }
}

pub async fn handle_delete_item(
    Path(id): Path<String>,
    Extension(repo): Extension<Arc<ItemRepository>>,
) -> Response {
    let id: i64 = match id.parse() {
        Ok(id) => id,
        Err(_) => return error_response(StatusCode::NOT_FOUND, MSG_ITEM_NOT_FOUND),
    };

    match repo.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(Error::NotFound) => error_response(StatusCode::NOT_FOUND, MSG_ITEM_NOT_FOUND),
        Err(err) => storage_failure("delete", &err),
    }
}

/// Catch-all for unmatched method/path combinations.
pub async fn handle_fallback() -> Response {
    error_response(StatusCode::NOT_FOUND, MSG_ROUTE_NOT_FOUND)
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

fn storage_failure(operation: &str, err: &Error) -> Response {
    tracing::error!("Failed to {} shopping list items: {}", operation, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL_ERROR)
}
