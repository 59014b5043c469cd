//! HTTP controller endpoints for the starhold API.
//!
//! Axum handlers for the build queue and empire accounts. Controllers parse
//! the request, hand off to the service or repository layer, and shape the
//! response; utoipa annotations feed the OpenAPI document.

pub mod build;
pub mod empire;
