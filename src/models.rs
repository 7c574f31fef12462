use serde::{Deserialize, Serialize};

/// Response type for successful PUT and DELETE operations
///
/// Neither operation echoes the affected document; both return a short
/// confirmation message instead.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
