use std::sync::Arc;

use starhold::server::{catalog::DesignCatalog, model::app::AppState};
use starhold_test_utils::setup::TestSetup;

mod build_requests;
mod empire;

/// Wraps a test database in the application state the handlers expect,
/// backed by the fixture design catalog.
pub fn app_state(test: &TestSetup) -> AppState {
    let catalog =
        DesignCatalog::from_json(starhold_test_utils::fixtures::TEST_CATALOG_JSON).unwrap();

    AppState {
        db: test.state.db.clone(),
        catalog: Arc::new(catalog),
    }
}
