//! Server-side models: shared application state and the per-transaction
//! star aggregate the build queue operates on.

pub mod app;
pub mod star;
