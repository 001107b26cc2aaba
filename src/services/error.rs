use crate::facex::FaceXError;

/// Message used when FaceX gives no usable explanation.
pub const UNKNOWN_ERROR: &str = "Unknown error";

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Malformed caller input.
    #[error("{0}")]
    Validation(String),

    /// FaceX rejected a specific file during upload.
    #[error("Upload of {file} failed: {comment}")]
    Upload { file: String, comment: String },

    /// FaceX reported an error or answered with an unexpected variant.
    #[error("{0}")]
    Backend(String),

    #[error(transparent)]
    Transport(#[from] FaceXError),
}

impl ServiceError {
    pub(crate) fn backend(comment: Option<&str>) -> Self {
        Self::Backend(comment.unwrap_or(UNKNOWN_ERROR).to_string())
    }

    pub(crate) fn upload(file: &str, comment: Option<&str>) -> Self {
        Self::Upload {
            file: file.to_string(),
            comment: comment.unwrap_or(UNKNOWN_ERROR).to_string(),
        }
    }
}
