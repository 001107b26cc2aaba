use garde::Validate;
use serde::{Deserialize, Serialize};

use super::job::{
    ComparisonResult, ComparisonStatus, MatchedFace, RecognizedFace, SearchStats, SearchStatus,
};

/// Response after a comparison or search upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub guid: String,
}

impl UploadResponse {
    pub fn new(guid: String) -> Self {
        Self {
            success: true,
            guid,
        }
    }
}

/// Response for polling a job. `state` supplies the `status` tag and payload.
#[derive(Debug, Serialize)]
pub struct StatusResponse<S> {
    pub success: bool,
    #[serde(flatten)]
    pub state: S,
}

impl<S: Serialize> StatusResponse<S> {
    pub fn new(state: S) -> Self {
        Self {
            success: true,
            state,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CompareState {
    InProgress,
    NoFaces,
    Complete { matches: ComparisonResult },
}

impl From<ComparisonStatus> for CompareState {
    fn from(status: ComparisonStatus) -> Self {
        match status {
            ComparisonStatus::Pending => Self::InProgress,
            ComparisonStatus::NoFaces => Self::NoFaces,
            ComparisonStatus::NoMatches => Self::Complete {
                matches: ComparisonResult::new(),
            },
            ComparisonStatus::Complete(matches) => Self::Complete { matches },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SearchState {
    InProgress,
    Complete { stats: Vec<SearchStats> },
}

impl From<SearchStatus> for SearchState {
    fn from(status: SearchStatus) -> Self {
        match status {
            SearchStatus::Pending => Self::InProgress,
            SearchStatus::Complete(stats) => Self::Complete { stats },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecognizedFacesResponse {
    pub success: bool,
    pub faces: Vec<RecognizedFace>,
}

#[derive(Debug, Serialize)]
pub struct MatchedFacesResponse {
    pub success: bool,
    pub matches: Vec<MatchedFace>,
}

/// Text fields of the search upload form.
#[derive(Debug, Validate)]
pub struct SearchUploadForm {
    /// Similarity threshold on a 0-100 scale.
    #[garde(range(min = 0, max = 100))]
    pub min_similarity: u32,
}

/// Pagination for matched faces.
#[derive(Debug, Deserialize, Validate)]
pub struct MatchedFacesQuery {
    #[serde(default)]
    #[garde(skip)]
    pub offset: u32,

    #[serde(default = "default_page_size")]
    #[garde(range(min = 1, max = 100))]
    pub count: u32,
}

fn default_page_size() -> u32 {
    20
}
