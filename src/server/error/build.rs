use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures surfaced by the build queue engine.
///
/// Validation variants carry display names rather than catalog identifiers so
/// the rendered message can be shown to the player as-is.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot build {design} as level {level} {required_design} is required.")]
    DependencyNotMet {
        design: String,
        required_design: String,
        level: i32,
    },
    #[error("Cannot build {design}, maximum per colony reached.")]
    MaxPerColonyReached { design: String },
    #[error("Cannot build {design}, maximum per empire reached.")]
    MaxPerEmpireReached { design: String },
    #[error("You don't have enough cash to accelerate this build.")]
    InsufficientCash { required: f64 },
    #[error("Star {0} not found")]
    StarNotFound(i32),
    #[error("Colony {0} not found")]
    ColonyNotFound(i32),
    #[error("Build request {0} not found")]
    BuildRequestNotFound(i32),
    #[error("Design {0:?} not found")]
    DesignNotFound(String),
}

impl BuildError {
    /// Stable error code surfaced in the response envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DependencyNotMet { .. } => "CannotBuildDependencyNotMet",
            Self::MaxPerColonyReached { .. } => "CannotBuildMaxPerColonyReached",
            Self::MaxPerEmpireReached { .. } => "CannotBuildMaxPerEmpireReached",
            Self::InsufficientCash { .. } => "InsufficientCash",
            Self::StarNotFound(_)
            | Self::ColonyNotFound(_)
            | Self::BuildRequestNotFound(_)
            | Self::DesignNotFound(_) => "NotFound",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            Self::DependencyNotMet { .. }
            | Self::MaxPerColonyReached { .. }
            | Self::MaxPerEmpireReached { .. }
            | Self::InsufficientCash { .. } => StatusCode::BAD_REQUEST,
            Self::StarNotFound(_)
            | Self::ColonyNotFound(_)
            | Self::BuildRequestNotFound(_)
            | Self::DesignNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for BuildError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "{}", self);

        (
            self.status(),
            Json(ErrorDto {
                code: self.code().to_string(),
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
