use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::catalog::DesignCatalog;

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub catalog: Arc<DesignCatalog>,
}

impl From<(DatabaseConnection, Arc<DesignCatalog>)> for AppState {
    fn from((db, catalog): (DatabaseConnection, Arc<DesignCatalog>)) -> Self {
        Self { db, catalog }
    }
}
