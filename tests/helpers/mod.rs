//! Test helper utilities: a scripted in-memory FaceX backend and HTTP helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

use facex_gateway::app_state::AppState;
use facex_gateway::facex::responses::{
    CapturedFacesResponse, CompareResultsResponse, MatchedFacesResponse, ResponseHeader,
    SearchStatusResponse, SearchUploadResponse, StartAck, UploadAck,
};
use facex_gateway::facex::{FaceXBackend, FaceXError};
use facex_gateway::models::upload::UploadTarget;
use facex_gateway::routes;

/// A backend call as observed by [`MockBackend`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    StartComparison {
        file: String,
        candidates: usize,
        segment: String,
    },
    UploadForComparison {
        file: String,
        guid: String,
        index: usize,
        total: usize,
        label: String,
    },
    GetComparisonResults {
        guid: String,
    },
    UploadForSearch {
        file: String,
        min_similarity: u32,
    },
    CheckSearchStatus {
        guid: String,
    },
    GetCapturedFaces {
        guid: String,
    },
    GetMatchedFaces {
        guid: String,
        face_id: i64,
        offset: u32,
        count: u32,
    },
}

/// FaceX stand-in that replays scripted responses and records every call.
///
/// Comparison photo uploads succeed unless rejected with
/// [`reject_upload`](Self::reject_upload). Unscripted calls fail with a
/// transport error.
#[derive(Default)]
pub struct MockBackend {
    calls: Mutex<Vec<Call>>,
    start_ack: Option<StartAck>,
    rejected_uploads: HashMap<usize, String>,
    comparison_results: Option<CompareResultsResponse>,
    search_upload: Option<SearchUploadResponse>,
    search_status: Option<SearchStatusResponse>,
    captured_faces: Option<CapturedFacesResponse>,
    matched_faces: Option<MatchedFacesResponse>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_ack(mut self, ack: StartAck) -> Self {
        self.start_ack = Some(ack);
        self
    }

    pub fn reject_upload(mut self, index: usize, comment: &str) -> Self {
        self.rejected_uploads.insert(index, comment.to_string());
        self
    }

    pub fn comparison_results(mut self, response: CompareResultsResponse) -> Self {
        self.comparison_results = Some(response);
        self
    }

    pub fn search_upload(mut self, response: SearchUploadResponse) -> Self {
        self.search_upload = Some(response);
        self
    }

    pub fn search_status(mut self, response: SearchStatusResponse) -> Self {
        self.search_status = Some(response);
        self
    }

    pub fn captured_faces(mut self, response: CapturedFacesResponse) -> Self {
        self.captured_faces = Some(response);
        self
    }

    pub fn matched_faces(mut self, response: MatchedFacesResponse) -> Self {
        self.matched_faces = Some(response);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

fn scripted<T: Clone>(response: &Option<T>, call: &str) -> Result<T, FaceXError> {
    response
        .clone()
        .ok_or_else(|| FaceXError::Config(format!("no scripted response for {call}")))
}

#[async_trait]
impl FaceXBackend for MockBackend {
    async fn start_comparison(
        &self,
        photo: &UploadTarget,
        candidate_count: usize,
        segment_label: &str,
    ) -> Result<StartAck, FaceXError> {
        self.record(Call::StartComparison {
            file: photo.original_name.clone(),
            candidates: candidate_count,
            segment: segment_label.to_string(),
        });
        scripted(&self.start_ack, "start_comparison")
    }

    async fn upload_photo_for_comparison(
        &self,
        photo: &UploadTarget,
        guid: &str,
        index: usize,
        total: usize,
        label: &str,
    ) -> Result<UploadAck, FaceXError> {
        self.record(Call::UploadForComparison {
            file: photo.original_name.clone(),
            guid: guid.to_string(),
            index,
            total,
            label: label.to_string(),
        });

        let header = match self.rejected_uploads.get(&index) {
            Some(comment) => ResponseHeader {
                response_type: 2,
                result_code: -1,
                comment: comment.clone(),
            },
            None => ResponseHeader::default(),
        };
        Ok(UploadAck { header })
    }

    async fn get_comparison_results(
        &self,
        guid: &str,
    ) -> Result<CompareResultsResponse, FaceXError> {
        self.record(Call::GetComparisonResults {
            guid: guid.to_string(),
        });
        scripted(&self.comparison_results, "get_comparison_results")
    }

    async fn upload_photo_for_search(
        &self,
        photo: &UploadTarget,
        min_similarity: u32,
    ) -> Result<SearchUploadResponse, FaceXError> {
        self.record(Call::UploadForSearch {
            file: photo.original_name.clone(),
            min_similarity,
        });
        scripted(&self.search_upload, "upload_photo_for_search")
    }

    async fn check_search_status(&self, guid: &str) -> Result<SearchStatusResponse, FaceXError> {
        self.record(Call::CheckSearchStatus {
            guid: guid.to_string(),
        });
        scripted(&self.search_status, "check_search_status")
    }

    async fn get_captured_faces(&self, guid: &str) -> Result<CapturedFacesResponse, FaceXError> {
        self.record(Call::GetCapturedFaces {
            guid: guid.to_string(),
        });
        scripted(&self.captured_faces, "get_captured_faces")
    }

    async fn get_matched_faces(
        &self,
        guid: &str,
        face_id: i64,
        offset: u32,
        count: u32,
    ) -> Result<MatchedFacesResponse, FaceXError> {
        self.record(Call::GetMatchedFaces {
            guid: guid.to_string(),
            face_id,
            offset,
            count,
        });
        scripted(&self.matched_faces, "get_matched_faces")
    }
}

/// Photos named `photo0.jpg`, `photo1.jpg`, ... held in memory.
pub fn photos(count: usize) -> Vec<UploadTarget> {
    (0..count)
        .map(|i| UploadTarget::from_buffer(PNG_MAGIC.to_vec(), format!("photo{i}.jpg")))
        .collect()
}

/// Enough of a PNG for format sniffing.
pub const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

/// Build the application router on top of a mock backend.
pub fn build_test_app(backend: Arc<MockBackend>) -> Router {
    let state = AppState::with_backends(backend.clone(), backend);
    let prometheus = PrometheusBuilder::new().build_recorder().handle();
    routes::router(state, Arc::new(prometheus), 10 * 1024 * 1024)
}

pub enum FormPart<'a> {
    File {
        name: &'a str,
        file_name: &'a str,
        data: &'a [u8],
    },
    Text {
        name: &'a str,
        value: &'a str,
    },
}

const BOUNDARY: &str = "facex-test-boundary";

fn multipart_body(parts: &[FormPart<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for part in parts {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match part {
            FormPart::File {
                name,
                file_name,
                data,
            } => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
                         Content-Type: application/octet-stream\r\n\r\n"
                    )
                    .as_bytes(),
                );
                body.extend_from_slice(data);
            }
            FormPart::Text { name, value } => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}")
                        .as_bytes(),
                );
            }
        }
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub async fn post_multipart(app: Router, uri: &str, parts: &[FormPart<'_>]) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(multipart_body(parts)))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
