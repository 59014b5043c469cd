//! Startup wiring: the database connection and the design catalog load.

use sea_orm::DatabaseConnection;

use crate::server::{
    catalog::DesignCatalog,
    config::Config,
    error::{config::ConfigError, Error},
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Read and parse the design catalog named by `CATALOG_PATH`
pub fn load_catalog(config: &Config) -> Result<DesignCatalog, Error> {
    let json =
        std::fs::read_to_string(&config.catalog_path).map_err(|source| ConfigError::CatalogRead {
            path: config.catalog_path.clone(),
            source,
        })?;

    let catalog =
        DesignCatalog::from_json(&json).map_err(|source| ConfigError::CatalogParse {
            path: config.catalog_path.clone(),
            source,
        })?;

    tracing::info!(designs = catalog.len(), "loaded design catalog");

    Ok(catalog)
}
