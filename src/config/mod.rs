use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:3000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Base URL of the FaceX HTTP gateway
    pub facex_url: String,

    /// Per-request timeout for comparison calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub facex_timeout_secs: u64,

    /// Per-request timeout for search calls, in seconds. Gallery search
    /// against a large corpus is slow, hence the long default.
    #[serde(default = "default_search_timeout_secs")]
    pub facex_search_timeout_secs: u64,

    /// Maximum accepted request body size
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_bind_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_search_timeout_secs() -> u64 {
    60 * 60
}

fn default_max_upload_bytes() -> usize {
    50 * 1024 * 1024
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    pub fn facex_timeout(&self) -> Duration {
        Duration::from_secs(self.facex_timeout_secs)
    }

    pub fn facex_search_timeout(&self) -> Duration {
        Duration::from_secs(self.facex_search_timeout_secs)
    }
}
