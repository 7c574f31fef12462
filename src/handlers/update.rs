use crate::error::{ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::body::Bytes;
use axum::{extract::Path, extract::State, http::StatusCode, Json};
use serde_json::Value as JsonValue;

/// PUT /courses/:id handler - Merge-update a single course
///
/// Only the fields present in the body are overwritten; fields not
/// mentioned are left untouched. The body is read as raw bytes and parsed
/// here so that id validation always runs first and any unreadable body
/// (invalid UTF-8 included) takes the same internal-error path as a store
/// failure.
#[utoipa::path(
    put,
    path = routes::COURSE_ITEM,
    params(
        ("id" = String, Path, description = "Numeric id of the course")
    ),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Course updated", body = MessageResponse),
        (status = 400, description = "Missing or invalid course id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Malformed body or store error", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = super::parse_course_id(&id_str)?;

    let fields = serde_json::from_slice::<JsonValue>(&body)
        .map_err(|e| anyhow::Error::from(e).context("Request body is not valid JSON"))
        .and_then(|json| store::document_from_json(&json))
        .map_err(|e| ApiError::internal("Failed to update course.", e))?;

    match state.store.update_course(id, fields).await {
        Ok(true) => {
            tracing::info!("Successfully updated course with id: {}", id);
            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: "Course updated successfully.".to_string(),
                }),
            ))
        }
        Ok(false) => {
            tracing::info!("Course not found with id: {}", id);
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::internal("Failed to update course.", e)),
    }
}
