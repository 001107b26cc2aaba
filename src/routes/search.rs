use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Multipart, Path, Query, State};
use axum::Json;
use garde::Validate;

use super::error::{ApiError, ApiResult};
use super::upload::UploadForm;
use crate::app_state::AppState;
use crate::models::api::{
    MatchedFacesQuery, MatchedFacesResponse, RecognizedFacesResponse, SearchState,
    SearchUploadForm, StatusResponse, UploadResponse,
};

const PHOTO_FIELD: &str = "photo";
const MIN_SIMILARITY_FIELD: &str = "minSimilarity";

/// POST /api/v1/search — Start a gallery search job.
pub async fn submit_search(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut form = UploadForm::read(multipart).await?;

    let min_similarity = form
        .field(MIN_SIMILARITY_FIELD)
        .ok_or_else(|| ApiError::BadRequest(format!("Missing {MIN_SIMILARITY_FIELD}")))?
        .trim()
        .parse::<u32>()
        .map_err(|_| ApiError::BadRequest(format!("Invalid {MIN_SIMILARITY_FIELD}")))?;
    let params = SearchUploadForm { min_similarity };
    params.validate()?;

    let photo = form
        .take_photos(PHOTO_FIELD)
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::BadRequest(format!("Missing {PHOTO_FIELD}")))?;

    let guid = state.search.upload(&photo, params.min_similarity).await?;

    Ok(Json(UploadResponse::new(guid)))
}

/// GET /api/v1/search/{guid} — Poll a search job.
pub async fn get_search_status(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> ApiResult<Json<StatusResponse<SearchState>>> {
    let status = state.search.status(&guid).await?;
    Ok(Json(StatusResponse::new(status.into())))
}

/// GET /api/v1/search/{guid}/faces — Faces recognized in the search photo.
pub async fn get_recognized_faces(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> ApiResult<Json<RecognizedFacesResponse>> {
    let faces = state.search.recognized_faces(&guid).await?;
    Ok(Json(RecognizedFacesResponse {
        success: true,
        faces,
    }))
}

/// GET /api/v1/search/{guid}/faces/{face_id}/matches — Gallery matches, paged.
pub async fn get_matched_faces(
    State(state): State<AppState>,
    path: Result<Path<(String, i64)>, PathRejection>,
    page: Result<Query<MatchedFacesQuery>, QueryRejection>,
) -> ApiResult<Json<MatchedFacesResponse>> {
    let Path((guid, face_id)) = path?;
    let Query(page) = page?;
    page.validate()?;

    let matches = state
        .search
        .matched_faces(&guid, face_id, page.offset, page.count)
        .await?;

    Ok(Json(MatchedFacesResponse {
        success: true,
        matches,
    }))
}
