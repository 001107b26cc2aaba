//! Typed FaceX responses.
//!
//! Every response carries a [`ResponseHeader`]. Calls that can answer with
//! more than one shape are closed enums internally tagged by `variant`;
//! unrecognised tags decode to `Unknown`.

use serde::Deserialize;

/// Result codes shared across FaceX calls. Their meaning is call-specific.
pub mod codes {
    pub const OK: i32 = 0;
    pub const IN_PROGRESS: i32 = 1;
    pub const COMPLETED: i32 = 3;
    /// Comparison: no face recognized in the reference photo.
    pub const NO_FACES: i32 = -3;
    /// Comparison: reference face found, nothing matched.
    pub const NO_MATCHES: i32 = -7;

    /// Response type whose comment is known to be meaningless.
    pub const BOGUS_COMMENT_RESPONSE_TYPE: i32 = 229;
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseHeader {
    #[serde(default)]
    pub response_type: i32,
    #[serde(default)]
    pub result_code: i32,
    #[serde(default)]
    pub comment: String,
}

impl ResponseHeader {
    pub fn is_error(&self) -> bool {
        self.result_code < 0
    }

    pub fn is_pending(&self) -> bool {
        self.result_code == codes::IN_PROGRESS
    }
}

/// Acknowledgement of a comparison start.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StartAck {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(default)]
    pub server_request_id: String,
}

/// Acknowledgement of a comparison photo upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadAck {
    #[serde(flatten)]
    pub header: ResponseHeader,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompareEntry {
    pub label: String,
    pub similarity: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CompareCompleted {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(default)]
    pub entries: Vec<CompareEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum CompareResultsResponse {
    Completed(CompareCompleted),
    Error(ResponseHeader),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchUploadAck {
    #[serde(flatten)]
    pub header: ResponseHeader,
    pub server_request_id: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SearchUploadResponse {
    UploadAcknowledged(SearchUploadAck),
    Error(ResponseHeader),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchStatEntry {
    #[serde(rename = "faceID")]
    pub face_id: i64,
    pub count: i64,
    pub confidence: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchCompleted {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(default)]
    pub stats: Vec<SearchStatEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum SearchStatusResponse {
    InProgress(ResponseHeader),
    Completed(SearchCompleted),
    Error(ResponseHeader),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedFaceEntry {
    #[serde(rename = "faceID")]
    pub face_id: i64,
    pub min_similarity: i32,
    pub max_similarity: i32,
    pub face: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CapturedFaces {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(default)]
    pub entries: Vec<CapturedFaceEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum CapturedFacesResponse {
    CapturedFaces(CapturedFaces),
    InProgress(ResponseHeader),
    Error(ResponseHeader),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedFaceEntry {
    pub similarity: i32,
    /// Legacy object name. Some FaceX versions put a `{GUID}` placeholder here.
    #[serde(default, rename = "nameL")]
    pub name_l: String,
    #[serde(default)]
    pub path_parsed: Vec<String>,
    pub face: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchedFaces {
    #[serde(flatten)]
    pub header: ResponseHeader,
    #[serde(default)]
    pub entries: Vec<MatchedFaceEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "variant", rename_all = "snake_case")]
pub enum MatchedFacesResponse {
    MatchedFaces(MatchedFaces),
    InProgress(ResponseHeader),
    Error(ResponseHeader),
    #[serde(other)]
    Unknown,
}

/// Uniform access to the header of any response variant.
pub trait FaceXResponse {
    /// `None` for variants FaceX sent without a recognisable tag.
    fn header(&self) -> Option<&ResponseHeader>;

    fn is_error(&self) -> bool {
        self.header().is_some_and(ResponseHeader::is_error)
    }

    fn is_pending(&self) -> bool {
        self.header().is_some_and(ResponseHeader::is_pending)
    }

    fn comment(&self) -> Option<&str> {
        self.header()
            .map(|h| h.comment.as_str())
            .filter(|c| !c.is_empty())
    }

    fn response_type(&self) -> Option<i32> {
        self.header().map(|h| h.response_type)
    }
}

impl FaceXResponse for StartAck {
    fn header(&self) -> Option<&ResponseHeader> {
        Some(&self.header)
    }
}

impl FaceXResponse for UploadAck {
    fn header(&self) -> Option<&ResponseHeader> {
        Some(&self.header)
    }
}

impl FaceXResponse for CompareResultsResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        match self {
            Self::Completed(r) => Some(&r.header),
            Self::Error(h) => Some(h),
            Self::Unknown => None,
        }
    }
}

impl FaceXResponse for SearchUploadResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        match self {
            Self::UploadAcknowledged(r) => Some(&r.header),
            Self::Error(h) => Some(h),
            Self::Unknown => None,
        }
    }
}

impl FaceXResponse for SearchStatusResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        match self {
            Self::Completed(r) => Some(&r.header),
            Self::InProgress(h) | Self::Error(h) => Some(h),
            Self::Unknown => None,
        }
    }
}

impl FaceXResponse for CapturedFacesResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        match self {
            Self::CapturedFaces(r) => Some(&r.header),
            Self::InProgress(h) | Self::Error(h) => Some(h),
            Self::Unknown => None,
        }
    }
}

impl FaceXResponse for MatchedFacesResponse {
    fn header(&self) -> Option<&ResponseHeader> {
        match self {
            Self::MatchedFaces(r) => Some(&r.header),
            Self::InProgress(h) | Self::Error(h) => Some(h),
            Self::Unknown => None,
        }
    }
}
