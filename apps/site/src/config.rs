use anyhow::{Context, Result};

use crate::contact::submitter::DEFAULT_CONTACT_ENDPOINT;

/// Application configuration loaded from environment variables.
/// Nothing is required; every key has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub contact_endpoint: String,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            contact_endpoint: std::env::var("CONTACT_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_CONTACT_ENDPOINT.to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
