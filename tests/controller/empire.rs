use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use starhold::server::controller::empire::get_empire;
use starhold_test_utils::prelude::*;

use super::app_state;

/// Expect 200 OK with the empire's account
#[tokio::test]
async fn get_returns_empire() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 250.0).await?;

    let result = get_empire(State(app_state(&test)), Path(empire.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found for an empire that does not exist
#[tokio::test]
async fn get_rejects_unknown_empire() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;

    let result = get_empire(State(app_state(&test)), Path(7)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
