use axum::{
    Router,
    extract::Extension,
    routing::{get, put},
};
use shopping_list::api::handlers::{
    handle_create_item, handle_delete_item, handle_fallback, handle_list_items,
    handle_update_item,
};
use shopping_list::api::protocol::{ENDPOINT_COLLECTION, ENDPOINT_ITEM};
use shopping_list::items::repository::ItemRepository;
use shopping_list::storage::file::FileStore;
use std::net::SocketAddr;
use std::sync::Arc;

const PORT: u16 = 3000;
const DATA_DIR: &str = "data";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // 1. Storage bootstrap:
    let store = FileStore::new(DATA_DIR);
    store.ensure_ready()?;

    let repository = Arc::new(ItemRepository::new(store));

    // 2. HTTP Router. Method routers get the same fallback so that an
    // unsupported method on a known path is a 404, not a 405:
    let app = Router::new()
        .route(
            ENDPOINT_COLLECTION,
            get(handle_list_items)
                .post(handle_create_item)
                .fallback(handle_fallback),
        )
        .route(
            ENDPOINT_ITEM,
            put(handle_update_item)
                .delete(handle_delete_item)
                .fallback(handle_fallback),
        )
        .fallback(handle_fallback)
        .layer(Extension(repository));

    // 3. Start HTTP server:
    let addr = SocketAddr::from(([127, 0, 0, 1], PORT));
    tracing::info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
