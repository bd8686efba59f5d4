use std::sync::Arc;

use axum::{
    Router,
    http::{HeaderValue, Method},
};
use tower_http::cors::CorsLayer;

use crate::{
    catalog::{self, CatalogView},
    config::{AppConfig, CorsConfig},
    error::{AppError, Result},
    models::Product,
    routes,
    sources::{CatalogBackend, RemoteCatalog},
};

#[derive(Clone)]
pub struct AppState {
    pub seed: Arc<Vec<Product>>,
    pub backend: Arc<dyn CatalogBackend>,
    pub view: CatalogView,
    pub default_top: u32,
}

impl AppState {
    pub fn new(backend: Arc<dyn CatalogBackend>, default_top: u32) -> Self {
        let seed = catalog::baseline();
        let view = CatalogView::new(seed.clone());

        Self {
            seed: Arc::new(seed),
            backend,
            view,
            default_top,
        }
    }
}

pub fn build(config: &AppConfig) -> Result<Router> {
    let backend = RemoteCatalog::new(&config.upstream)?;
    let state = AppState::new(Arc::new(backend), config.upstream.default_top);

    router(state, &config.cors)
}

pub fn router(state: AppState, cors: &CorsConfig) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin.parse::<HeaderValue>().map_err(|_| {
                AppError::ConfigError(format!("Invalid CORS origin: {}", origin))
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    Ok(routes::create_router().layer(cors).with_state(state))
}
