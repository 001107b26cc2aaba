use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoStaticStr;

/// The two kinds of FaceX job this service drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum JobKind {
    Comparison,
    Search,
}

/// Similarity scores keyed by upload label ("1", "2", ...).
pub type ComparisonResult = BTreeMap<String, i32>;

/// Outcome of polling a comparison job.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonStatus {
    Pending,
    /// No usable face in the reference photo.
    NoFaces,
    /// The reference face was found but nothing matched it.
    NoMatches,
    Complete(ComparisonResult),
}

/// Per-face statistics of a resolved search job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchStats {
    #[serde(rename = "faceID")]
    pub face_id: i64,
    pub count: i64,
    pub confidence: i64,
}

/// Outcome of polling a search job.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchStatus {
    Pending,
    Complete(Vec<SearchStats>),
}

/// A face detected in the submitted search photo.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedFace {
    #[serde(rename = "faceID")]
    pub face_id: i64,
    pub min_similarity: i32,
    pub max_similarity: i32,
    /// Thumbnail as delivered by FaceX.
    pub face: String,
}

/// A gallery match for one recognized face.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchedFace {
    pub similarity: i32,
    pub objname: String,
    pub face: String,
}
