mod health;
mod products;

use axum::{routing::get, Router};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list_products))
        .route("/product/:id", get(products::get_product))
        .route("/health", get(health::health_check))
}
