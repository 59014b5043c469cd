use thiserror::Error;

/// Errors a test setup or seed step can produce.
#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
