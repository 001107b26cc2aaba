use axum::extract::{Multipart, Path, State};
use axum::Json;

use super::error::ApiResult;
use super::upload::UploadForm;
use crate::app_state::AppState;
use crate::models::api::{CompareState, StatusResponse, UploadResponse};

/// Multipart field carrying the photos; the first one is the reference.
const PHOTOS_FIELD: &str = "photos";

/// POST /api/v1/compare — Start a comparison job.
pub async fn submit_comparison(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<UploadResponse>> {
    let mut form = UploadForm::read(multipart).await?;
    let photos = form.take_photos(PHOTOS_FIELD);

    let guid = state.compare.upload(&photos).await?;

    Ok(Json(UploadResponse::new(guid)))
}

/// GET /api/v1/compare/{guid} — Poll a comparison job.
pub async fn get_comparison_status(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> ApiResult<Json<StatusResponse<CompareState>>> {
    let status = state.compare.status(&guid).await?;
    Ok(Json(StatusResponse::new(status.into())))
}
