use std::sync::Arc;

use crate::config::AppConfig;
use crate::facex::client::FaceXClient;
use crate::facex::{FaceXBackend, FaceXError};
use crate::services::{CompareService, SearchService};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub compare: Arc<CompareService>,
    pub search: Arc<SearchService>,
}

impl AppState {
    pub fn new(compare: CompareService, search: SearchService) -> Self {
        Self {
            compare: Arc::new(compare),
            search: Arc::new(search),
        }
    }

    /// Build both services on one FaceX connection pool. Search calls get
    /// their own, much longer, request timeout.
    pub fn from_config(config: &AppConfig) -> Result<Self, FaceXError> {
        let client = FaceXClient::new(&config.facex_url, config.facex_timeout())?;
        let search_client = client.with_request_timeout(config.facex_search_timeout());

        Ok(Self::with_backends(Arc::new(client), Arc::new(search_client)))
    }

    pub fn with_backends(
        compare_backend: Arc<dyn FaceXBackend>,
        search_backend: Arc<dyn FaceXBackend>,
    ) -> Self {
        Self::new(
            CompareService::new(compare_backend),
            SearchService::new(search_backend),
        )
    }
}
