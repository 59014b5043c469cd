//! Error types for the Starhold server.
//!
//! Validation failures (unmet dependencies, quantity caps, insufficient cash)
//! and not-found failures carry a stable machine-readable code and a message
//! suitable for direct display; everything else is wrapped into a generic 500
//! response with the original cause preserved for logging. All errors
//! implement `IntoResponse` so controllers can surface them with `?`.

pub mod build;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{build::BuildError, config::ConfigError},
};

/// Main error type for the Starhold server.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single unified type so services and controllers can propagate any
/// failure with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Build queue validation or lookup failure.
    #[error(transparent)]
    BuildError(#[from] BuildError),
    /// Configuration error (missing/invalid environment variables, catalog load).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// I/O error (binding the listener, serving connections).
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Internal error indicating a bug in Starhold's code.
    #[error("Internal error with Starhold's code, this indicates a bug: {0:?}")]
    InternalError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::BuildError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so implementation details never leak across the API boundary.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                code: "InternalServerError".to_string(),
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
