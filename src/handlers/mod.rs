pub mod delete;
pub mod get;
pub mod health;
pub mod update;

pub use delete::delete_handler;
pub use get::get_handler;
pub use health::health_handler;
pub use update::update_handler;

use crate::error::ApiError;
use crate::store::CourseId;

/// Validate and parse the `id` path parameter shared by all course endpoints
///
/// An absent/empty value and a non-numeric value are distinct client errors
/// with distinct response bodies. Any numeric form is accepted, including
/// decimals and exponents; a non-integral value is a valid key that simply
/// matches no stored course.
pub(crate) fn parse_course_id(raw: &str) -> Result<CourseId, ApiError> {
    if raw.trim().is_empty() {
        return Err(ApiError::MissingId);
    }
    if let Ok(id) = raw.parse::<i64>() {
        return Ok(CourseId::Int(id));
    }
    match raw.parse::<f64>() {
        Ok(id) if !id.is_nan() => Ok(CourseId::Float(id)),
        _ => Err(ApiError::InvalidId),
    }
}
