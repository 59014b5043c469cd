use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// Stable machine-readable error code
    pub code: String,
    /// Human-readable error message, suitable for direct display
    pub error: String,
}
