use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable {0:?}")]
    MissingEnvVar(String),
    #[error("Invalid value {value:?} for environment variable {name:?}")]
    InvalidEnvVar { name: String, value: String },
    #[error("Failed to read design catalog at {path:?}: {source}")]
    CatalogRead {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to parse design catalog at {path:?}: {source}")]
    CatalogParse {
        path: String,
        source: serde_json::Error,
    },
}
