mod app_config;
mod upstream_config;

pub use app_config::{AppConfig, CorsConfig, ServerConfig};
pub use upstream_config::UpstreamConfig;
