use std::sync::Arc;

use crate::config::Config;
use crate::contact::{ContactSubmitter, HttpContactSubmitter};

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Transport for the page's contact form. Built from `config.contact_endpoint`.
    pub submitter: Arc<dyn ContactSubmitter>,
}

impl AppState {
    pub fn from_config(config: Config) -> Self {
        let submitter = Arc::new(HttpContactSubmitter::new(config.contact_endpoint.clone()));
        Self { config, submitter }
    }
}
