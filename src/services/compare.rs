//! Pairwise photo comparison jobs.
//!
//! The first photo is the reference; every following photo is uploaded into
//! the same FaceX job and scored against it. Labels are 1-based upload
//! positions.

use std::sync::Arc;

use super::error::{ServiceError, UNKNOWN_ERROR};
use crate::facex::responses::{codes, CompareResultsResponse, FaceXResponse};
use crate::facex::FaceXBackend;
use crate::models::job::{ComparisonResult, ComparisonStatus, JobKind};
use crate::models::upload::UploadTarget;

const REFERENCE_SEGMENT: &str = "0";

pub struct CompareService {
    backend: Arc<dyn FaceXBackend>,
}

impl CompareService {
    pub fn new(backend: Arc<dyn FaceXBackend>) -> Self {
        Self { backend }
    }

    /// Start a comparison job and upload every photo into it. Returns the job guid.
    ///
    /// Candidates are uploaded one at a time, in order: FaceX assigns job
    /// slots by position. A failed upload stops the sequence; photos already
    /// accepted stay in the job.
    pub async fn upload(&self, files: &[UploadTarget]) -> Result<String, ServiceError> {
        let Some((reference, candidates)) = files.split_first().filter(|_| files.len() >= 2)
        else {
            return Err(ServiceError::Validation("Need at least two files".to_string()));
        };
        let total = candidates.len();

        let ack = self
            .backend
            .start_comparison(reference, total, REFERENCE_SEGMENT)
            .await?;

        if ack.is_error() {
            tracing::warn!(
                file = %reference.original_name,
                result_code = ack.header.result_code,
                comment = %ack.header.comment,
                "FaceX rejected comparison reference photo"
            );
            record_upload_failure();
            return Err(ServiceError::upload(&reference.original_name, ack.comment()));
        }

        let guid = ack.server_request_id;

        for (index, file) in (1..).zip(candidates) {
            let label = index.to_string();
            let ack = self
                .backend
                .upload_photo_for_comparison(file, &guid, index, total, &label)
                .await?;

            if ack.is_error() {
                tracing::warn!(
                    guid = %guid,
                    file = %file.original_name,
                    index,
                    result_code = ack.header.result_code,
                    "FaceX rejected comparison photo"
                );
                record_upload_failure();
                return Err(ServiceError::upload(&file.original_name, ack.comment()));
            }
        }

        tracing::info!(guid = %guid, photos = files.len(), "Comparison job submitted");
        metrics::counter!("facex_uploads_total", "kind" => <&str>::from(JobKind::Comparison))
            .increment(1);

        Ok(guid)
    }

    /// Poll a comparison job.
    pub async fn status(&self, guid: &str) -> Result<ComparisonStatus, ServiceError> {
        let response = self.backend.get_comparison_results(guid).await?;

        let CompareResultsResponse::Completed(completed) = &response else {
            tracing::warn!(guid, ?response, "Unexpected comparison results variant");
            record_backend_error("comparison_status");
            return Err(ServiceError::Backend(UNKNOWN_ERROR.to_string()));
        };

        if response.is_pending() {
            return Ok(ComparisonStatus::Pending);
        }

        match completed.header.result_code {
            codes::NO_MATCHES => Ok(ComparisonStatus::NoMatches),
            codes::NO_FACES => Ok(ComparisonStatus::NoFaces),
            code if response.is_error() => {
                tracing::warn!(guid, result_code = code, "Comparison job failed");
                record_backend_error("comparison_status");
                Err(ServiceError::backend(response.comment()))
            }
            _ => Ok(ComparisonStatus::Complete(
                completed
                    .entries
                    .iter()
                    .map(|entry| (entry.label.clone(), entry.similarity))
                    .collect::<ComparisonResult>(),
            )),
        }
    }
}

fn record_upload_failure() {
    metrics::counter!(
        "facex_upload_failures_total",
        "kind" => <&str>::from(JobKind::Comparison)
    )
    .increment(1);
}

fn record_backend_error(operation: &'static str) {
    metrics::counter!("facex_backend_errors_total", "operation" => operation).increment(1);
}
