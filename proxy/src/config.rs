//! Proxy Configuration
//!
//! Everything comes from environment variables with local-development
//! defaults; there is no config file.

use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    /// Base URL the trailing proxy path is joined onto.
    pub backend_base_url: String,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("STS_PROXY_PORT", "3001"),
            backend_base_url: try_load("STS_BACKEND_BASE_URL", "http://localhost:4000/api/sts"),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
