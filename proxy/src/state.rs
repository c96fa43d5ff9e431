//! Shared Proxy State

use std::sync::Arc;

use crate::config::Config;

/// Configuration plus one reused HTTP client, shared across requests.
pub struct AppState {
    pub config: Config,
    pub client: reqwest::Client,
}

impl AppState {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            client: reqwest::Client::new(),
        })
    }
}
