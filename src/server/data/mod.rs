//! Data access layer repositories.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against a plain connection or inside an open transaction; the
//! build queue service relies on this to keep its validation reads and
//! writes in one atomic unit.

pub mod build_request;
pub mod empire;
pub mod star;
