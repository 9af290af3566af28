use std::sync::Arc;

use layar_core::BrandClassifier;
use reqwest::Client;

use crate::config::Config;

/// Shared, immutable per-process state. Canonical cinema data is not cached
/// here: every page request re-reads and re-normalizes the data document, so
/// no cross-request mutable state exists.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub brands: Arc<BrandClassifier>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let brands = Arc::new(config.brands.classifier());
        Self {
            config: Arc::new(config),
            brands,
            http: Client::new(),
        }
    }
}
