//! Data transfer objects shared between the HTTP API and its consumers.

pub mod api;
pub mod build;
pub mod empire;
