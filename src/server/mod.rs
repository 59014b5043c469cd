//! Server application core modules.
//!
//! Everything behind the HTTP API lives here: the immutable design catalog,
//! configuration, axum controllers, database repositories, error types, the
//! per-transaction star aggregate, routing, and the build queue service layer.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
