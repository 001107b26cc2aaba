//! FaceX response fixtures
#![allow(dead_code)]

use facex_gateway::facex::responses::{
    codes, CapturedFaceEntry, CapturedFaces, CompareCompleted, CompareEntry, MatchedFaceEntry,
    MatchedFaces, ResponseHeader, SearchCompleted, SearchStatEntry, SearchUploadAck, StartAck,
};

pub const COMPARE_GUID: &str = "{6F9619FF-8B86-D011-B42D-00C04FC964FF}";
pub const SEARCH_GUID: &str = "{21EC2020-3AEA-1069-A2DD-08002B30309D}";

pub fn header(result_code: i32, comment: &str) -> ResponseHeader {
    ResponseHeader {
        response_type: 0,
        result_code,
        comment: comment.to_string(),
    }
}

pub fn start_ack(guid: &str) -> StartAck {
    StartAck {
        header: header(codes::OK, ""),
        server_request_id: guid.to_string(),
    }
}

pub fn rejected_start_ack(comment: &str) -> StartAck {
    StartAck {
        header: header(-2, comment),
        server_request_id: String::new(),
    }
}

pub fn compare_completed(result_code: i32, entries: &[(&str, i32)]) -> CompareCompleted {
    CompareCompleted {
        header: header(result_code, ""),
        entries: entries
            .iter()
            .map(|(label, similarity)| CompareEntry {
                label: label.to_string(),
                similarity: *similarity,
            })
            .collect(),
    }
}

pub fn search_upload_ack(guid: &str) -> SearchUploadAck {
    SearchUploadAck {
        header: header(codes::OK, ""),
        server_request_id: guid.to_string(),
    }
}

pub fn search_completed(stats: &[(i64, i64, i64)]) -> SearchCompleted {
    SearchCompleted {
        header: header(codes::COMPLETED, ""),
        stats: stats
            .iter()
            .map(|&(face_id, count, confidence)| SearchStatEntry {
                face_id,
                count,
                confidence,
            })
            .collect(),
    }
}

pub fn captured_faces(entries: Vec<CapturedFaceEntry>) -> CapturedFaces {
    CapturedFaces {
        header: header(codes::OK, ""),
        entries,
    }
}

pub fn captured_face(face_id: i64, min: i32, max: i32, face: &str) -> CapturedFaceEntry {
    CapturedFaceEntry {
        face_id,
        min_similarity: min,
        max_similarity: max,
        face: face.to_string(),
    }
}

pub fn matched_faces(entries: Vec<MatchedFaceEntry>) -> MatchedFaces {
    MatchedFaces {
        header: header(codes::OK, ""),
        entries,
    }
}

pub fn matched_face(similarity: i32, name_l: &str, path: &[&str]) -> MatchedFaceEntry {
    MatchedFaceEntry {
        similarity,
        name_l: name_l.to_string(),
        path_parsed: path.iter().map(|s| s.to_string()).collect(),
        face: "thumb".to_string(),
    }
}
