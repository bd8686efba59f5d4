use crate::error::{AppError, Result};
use std::env;

const DEFAULT_UPSTREAM_URL: &str = "http://20.244.56.144/test";

#[derive(Debug, Clone)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub default_top: u32,
}

impl UpstreamConfig {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs = env::var("UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|_| {
                AppError::ConfigError("Invalid UPSTREAM_TIMEOUT_SECS value".to_string())
            })?;

        let default_top = env::var("DEFAULT_TOP")
            .unwrap_or_else(|_| "5".to_string())
            .parse()
            .map_err(|_| AppError::ConfigError("Invalid DEFAULT_TOP value".to_string()))?;

        if default_top == 0 {
            return Err(AppError::ConfigError(
                "DEFAULT_TOP must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            base_url,
            timeout_secs,
            default_top,
        })
    }
}
