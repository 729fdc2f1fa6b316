pub mod extract;
pub mod health;
pub mod items;
pub mod middleware;

use crate::db::Repository;
use axum::{
    routing::{get, patch},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>) -> Self {
        Self { repo }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/items",
            get(items::list_items)
                .post(items::create_item)
                .delete(items::delete_all_items),
        )
        .route(
            "/api/items/:id",
            patch(items::update_item_quantity).delete(items::delete_item),
        )
        .layer(axum::middleware::from_fn(middleware::json_content_type))
        .layer(cors)
        .with_state(state)
}
