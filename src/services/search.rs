//! Gallery search jobs.
//!
//! A search job runs one photo against the FaceX gallery. Once it resolves,
//! the faces recognized in the photo can be listed and the gallery matches
//! of each face paged through.

use std::sync::Arc;

use super::error::{ServiceError, UNKNOWN_ERROR};
use super::object_name;
use crate::facex::responses::{
    codes, CapturedFacesResponse, FaceXResponse, MatchedFacesResponse, SearchStatusResponse,
    SearchUploadResponse,
};
use crate::facex::FaceXBackend;
use crate::models::job::{JobKind, MatchedFace, RecognizedFace, SearchStats, SearchStatus};
use crate::models::upload::UploadTarget;

/// FaceX measures similarity in tenths of a percent.
const SIMILARITY_SCALE: u32 = 10;

pub struct SearchService {
    backend: Arc<dyn FaceXBackend>,
}

impl SearchService {
    /// `backend` should carry a long request timeout; searches against a
    /// large gallery take far longer than comparisons.
    pub fn new(backend: Arc<dyn FaceXBackend>) -> Self {
        Self { backend }
    }

    /// Submit a photo for gallery search. `min_similarity` is on a 0-100 scale.
    pub async fn upload(
        &self,
        file: &UploadTarget,
        min_similarity: u32,
    ) -> Result<String, ServiceError> {
        let response = self
            .backend
            .upload_photo_for_search(file, min_similarity.saturating_mul(SIMILARITY_SCALE))
            .await?;

        match response {
            SearchUploadResponse::UploadAcknowledged(ack) if !ack.header.is_error() => {
                tracing::info!(
                    guid = %ack.server_request_id,
                    file = %file.original_name,
                    min_similarity,
                    "Search job submitted"
                );
                metrics::counter!("facex_uploads_total", "kind" => <&str>::from(JobKind::Search))
                    .increment(1);
                Ok(ack.server_request_id)
            }
            other => {
                tracing::warn!(
                    file = %file.original_name,
                    response = ?other,
                    "FaceX rejected search photo"
                );
                metrics::counter!(
                    "facex_upload_failures_total",
                    "kind" => <&str>::from(JobKind::Search)
                )
                .increment(1);
                Err(ServiceError::upload(&file.original_name, other.comment()))
            }
        }
    }

    /// Poll a search job.
    pub async fn status(&self, guid: &str) -> Result<SearchStatus, ServiceError> {
        let response = self.backend.check_search_status(guid).await?;

        if response.is_error() {
            record_backend_error("search_status");
            return Err(ServiceError::backend(response.comment()));
        }

        match response {
            SearchStatusResponse::InProgress(_) => Ok(SearchStatus::Pending),
            SearchStatusResponse::Completed(completed) => Ok(SearchStatus::Complete(
                completed
                    .stats
                    .into_iter()
                    .map(|s| SearchStats {
                        face_id: s.face_id,
                        count: s.count,
                        confidence: s.confidence,
                    })
                    .collect(),
            )),
            other => {
                tracing::warn!(guid, response = ?other, "Unexpected search status variant");
                record_backend_error("search_status");
                Err(ServiceError::backend(other.comment()))
            }
        }
    }

    /// Faces recognized in the submitted photo. Fails while the job is
    /// still running; poll [`status`](Self::status) first.
    pub async fn recognized_faces(&self, guid: &str) -> Result<Vec<RecognizedFace>, ServiceError> {
        let response = self.backend.get_captured_faces(guid).await?;

        match response {
            CapturedFacesResponse::CapturedFaces(faces) if !faces.header.is_error() => Ok(faces
                .entries
                .into_iter()
                .map(|e| RecognizedFace {
                    face_id: e.face_id,
                    min_similarity: e.min_similarity,
                    max_similarity: e.max_similarity,
                    face: e.face,
                })
                .collect()),
            other => {
                tracing::warn!(guid, response = ?other, "Captured faces unavailable");
                record_backend_error("recognized_faces");
                Err(ServiceError::backend(other.comment()))
            }
        }
    }

    /// One page of gallery matches for a recognized face.
    pub async fn matched_faces(
        &self,
        guid: &str,
        face_id: i64,
        offset: u32,
        count: u32,
    ) -> Result<Vec<MatchedFace>, ServiceError> {
        let response = self
            .backend
            .get_matched_faces(guid, face_id, offset, count)
            .await?;

        match response {
            MatchedFacesResponse::MatchedFaces(matched) if !matched.header.is_error() => Ok(matched
                .entries
                .iter()
                .map(|e| MatchedFace {
                    similarity: e.similarity,
                    objname: object_name::resolve(e),
                    face: e.face.clone(),
                })
                .collect()),
            other => {
                tracing::warn!(guid, face_id, response = ?other, "Matched faces unavailable");
                record_backend_error("matched_faces");
                // This response type carries a misleading comment.
                if other.response_type() == Some(codes::BOGUS_COMMENT_RESPONSE_TYPE) {
                    return Err(ServiceError::Backend(UNKNOWN_ERROR.to_string()));
                }
                Err(ServiceError::backend(other.comment()))
            }
        }
    }
}

fn record_backend_error(operation: &'static str) {
    metrics::counter!("facex_backend_errors_total", "operation" => operation).increment(1);
}
