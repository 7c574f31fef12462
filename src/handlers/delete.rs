use crate::error::{ApiError, ErrorResponse};
use crate::models::MessageResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// DELETE /courses/:id handler - Remove a single course
///
/// Deleting an id that no longer exists returns 404, so repeated deletes
/// of the same id are not silently successful.
#[utoipa::path(
    delete,
    path = routes::COURSE_ITEM,
    params(
        ("id" = String, Path, description = "Numeric id of the course")
    ),
    responses(
        (status = 200, description = "Course deleted", body = MessageResponse),
        (status = 400, description = "Missing or invalid course id", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Store error", body = ErrorResponse)
    ),
    tag = "courses"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let id = super::parse_course_id(&id_str)?;

    match state.store.delete_course(id).await {
        Ok(true) => {
            tracing::info!("Successfully deleted course with id: {}", id);
            Ok((
                StatusCode::OK,
                Json(MessageResponse {
                    message: format!("Course with ID {} deleted.", id),
                }),
            ))
        }
        Ok(false) => {
            tracing::info!("Course not found with id: {}", id);
            Err(ApiError::NotFound)
        }
        Err(e) => Err(ApiError::internal("Failed to delete course.", e)),
    }
}
