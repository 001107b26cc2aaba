use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::responses::{
    CapturedFacesResponse, CompareResultsResponse, MatchedFacesResponse, SearchStatusResponse,
    SearchUploadResponse, StartAck, UploadAck,
};
use super::{FaceXBackend, FaceXError};
use crate::models::upload::UploadTarget;

/// HTTP client for the FaceX gateway.
///
/// Clones share one connection pool. Use [`with_request_timeout`](Self::with_request_timeout)
/// to get a handle with a different per-request timeout.
#[derive(Clone)]
pub struct FaceXClient {
    http: Client,
    base_url: Url,
    timeout: Duration,
}

#[derive(Serialize)]
struct PhotoPayload<'a> {
    photo: String,
    file_name: &'a str,
}

#[derive(Serialize)]
struct StartComparisonRequest<'a> {
    #[serde(flatten)]
    photo: PhotoPayload<'a>,
    candidates: usize,
    segment: &'a str,
}

#[derive(Serialize)]
struct ComparisonPhotoRequest<'a> {
    #[serde(flatten)]
    photo: PhotoPayload<'a>,
    index: usize,
    total: usize,
    label: &'a str,
}

#[derive(Serialize)]
struct SearchUploadRequest<'a> {
    #[serde(flatten)]
    photo: PhotoPayload<'a>,
    min_similarity: u32,
}

impl FaceXClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FaceXError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FaceXError::Config(format!("invalid FaceX base URL {base_url:?}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FaceXError::Config(format!(
                "FaceX base URL {base_url} cannot carry a path"
            )));
        }

        let http = Client::builder()
            .user_agent(concat!("facex-gateway/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout,
        })
    }

    /// A handle sharing this client's pool but with its own request timeout.
    pub fn with_request_timeout(&self, timeout: Duration) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Base URL extended by `segments`, each percent-encoded as exactly one
    /// path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, FaceXError> {
        if let Some(bad) = segments
            .iter()
            .find(|s| s.is_empty() || **s == "." || **s == "..")
        {
            return Err(FaceXError::InvalidPath(bad.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                FaceXError::Config(format!("FaceX base URL {} cannot carry a path", self.base_url))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn encode_photo<'a>(photo: &'a UploadTarget) -> Result<PhotoPayload<'a>, FaceXError> {
        let bytes = photo.read_bytes().await.map_err(|source| FaceXError::Photo {
            file: photo.original_name.clone(),
            source,
        })?;

        Ok(PhotoPayload {
            photo: base64::engine::general_purpose::STANDARD.encode(&bytes),
            file_name: &photo.original_name,
        })
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, FaceXError> {
        let response = request
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl FaceXBackend for FaceXClient {
    async fn start_comparison(
        &self,
        photo: &UploadTarget,
        candidate_count: usize,
        segment_label: &str,
    ) -> Result<StartAck, FaceXError> {
        let body = StartComparisonRequest {
            photo: Self::encode_photo(photo).await?,
            candidates: candidate_count,
            segment: segment_label,
        };
        self.send(self.http.post(self.endpoint(&["compare"])?).json(&body))
            .await
    }

    async fn upload_photo_for_comparison(
        &self,
        photo: &UploadTarget,
        guid: &str,
        index: usize,
        total: usize,
        label: &str,
    ) -> Result<UploadAck, FaceXError> {
        let body = ComparisonPhotoRequest {
            photo: Self::encode_photo(photo).await?,
            index,
            total,
            label,
        };
        let url = self.endpoint(&["compare", guid, "photos"])?;
        self.send(self.http.post(url).json(&body)).await
    }

    async fn get_comparison_results(
        &self,
        guid: &str,
    ) -> Result<CompareResultsResponse, FaceXError> {
        let url = self.endpoint(&["compare", guid])?;
        self.send(self.http.get(url)).await
    }

    async fn upload_photo_for_search(
        &self,
        photo: &UploadTarget,
        min_similarity: u32,
    ) -> Result<SearchUploadResponse, FaceXError> {
        let body = SearchUploadRequest {
            photo: Self::encode_photo(photo).await?,
            min_similarity,
        };
        self.send(self.http.post(self.endpoint(&["search"])?).json(&body))
            .await
    }

    async fn check_search_status(&self, guid: &str) -> Result<SearchStatusResponse, FaceXError> {
        let url = self.endpoint(&["search", guid])?;
        self.send(self.http.get(url)).await
    }

    async fn get_captured_faces(&self, guid: &str) -> Result<CapturedFacesResponse, FaceXError> {
        let url = self.endpoint(&["search", guid, "faces"])?;
        self.send(self.http.get(url)).await
    }

    async fn get_matched_faces(
        &self,
        guid: &str,
        face_id: i64,
        offset: u32,
        count: u32,
    ) -> Result<MatchedFacesResponse, FaceXError> {
        let face_id = face_id.to_string();
        let url = self.endpoint(&["search", guid, "faces", &face_id, "matches"])?;
        self.send(
            self.http
                .get(url)
                .query(&[("offset", offset), ("count", count)]),
        )
        .await
    }
}
