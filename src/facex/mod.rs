//! FaceX backend client.
//!
//! [`FaceXBackend`] is the seam the comparison and search services depend
//! on. [`client::FaceXClient`] implements it over HTTP.

pub mod client;
pub mod responses;

use async_trait::async_trait;

use crate::models::upload::UploadTarget;
use responses::{
    CapturedFacesResponse, CompareResultsResponse, MatchedFacesResponse, SearchStatusResponse,
    SearchUploadResponse, StartAck, UploadAck,
};

/// The FaceX calls consumed by the services. Each call is single-shot;
/// errors reported by FaceX itself come back inside the response.
#[async_trait]
pub trait FaceXBackend: Send + Sync {
    /// Start a comparison job with the reference photo.
    async fn start_comparison(
        &self,
        photo: &UploadTarget,
        candidate_count: usize,
        segment_label: &str,
    ) -> Result<StartAck, FaceXError>;

    /// Upload one candidate photo into an existing comparison job.
    async fn upload_photo_for_comparison(
        &self,
        photo: &UploadTarget,
        guid: &str,
        index: usize,
        total: usize,
        label: &str,
    ) -> Result<UploadAck, FaceXError>;

    async fn get_comparison_results(&self, guid: &str)
        -> Result<CompareResultsResponse, FaceXError>;

    /// `min_similarity` is on the FaceX 0-1000 scale.
    async fn upload_photo_for_search(
        &self,
        photo: &UploadTarget,
        min_similarity: u32,
    ) -> Result<SearchUploadResponse, FaceXError>;

    async fn check_search_status(&self, guid: &str) -> Result<SearchStatusResponse, FaceXError>;

    async fn get_captured_faces(&self, guid: &str) -> Result<CapturedFacesResponse, FaceXError>;

    async fn get_matched_faces(
        &self,
        guid: &str,
        face_id: i64,
        offset: u32,
        count: u32,
    ) -> Result<MatchedFacesResponse, FaceXError>;
}

/// Transport-level failures talking to FaceX.
#[derive(Debug, thiserror::Error)]
pub enum FaceXError {
    #[error("HTTP request to FaceX failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to read photo {file}: {source}")]
    Photo {
        file: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode FaceX response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("FaceX configuration error: {0}")]
    Config(String),

    #[error("Invalid FaceX path segment {0:?}")]
    InvalidPath(String),
}
