pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod sources;

pub use app::AppState;
pub use config::AppConfig;
pub use error::{AppError, Result};
