//! Status-code tests for the build queue endpoints, calling the axum
//! handlers directly against an in-memory database.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use entity::build_request::DesignKind;
use starhold::{
    model::build::{AccelerateDto, NewBuildRequestDto},
    server::controller::build::{
        accelerate_build_request, list_build_requests, stop_build_request, submit_build_request,
    },
};
use starhold_test_utils::prelude::*;

use super::app_state;

fn new_request_dto(empire_id: i32, design_id: &str, count: i32) -> NewBuildRequestDto {
    NewBuildRequestDto {
        empire_id,
        design_kind: DesignKind::Building,
        design_id: design_id.to_string(),
        count,
        existing_building_id: None,
    }
}

/// Expect 201 Created for a valid submission
#[tokio::test]
async fn submit_returns_created() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 0.0).await?;
    let star = test.game().insert_star("Alpha").await?;
    let colony = test.game().insert_colony(star.id, 0, empire.id).await?;

    let result = submit_build_request(
        State(app_state(&test)),
        Path((star.id, colony.id)),
        axum::Json(new_request_dto(empire.id, fixtures::MINE, 1)),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 400 Bad Request when a per-colony cap is already used up
#[tokio::test]
async fn submit_rejects_capped_design() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 0.0).await?;
    let star = test.game().insert_star("Alpha").await?;
    let colony = test.game().insert_colony(star.id, 0, empire.id).await?;
    test.game()
        .insert_build_request(&colony, DesignKind::Building, fixtures::SHIPYARD, 1, 0.0)
        .await?;

    let result = submit_build_request(
        State(app_state(&test)),
        Path((star.id, colony.id)),
        axum::Json(new_request_dto(empire.id, fixtures::SHIPYARD, 1)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found when submitting to a star that does not exist
#[tokio::test]
async fn submit_rejects_unknown_star() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 0.0).await?;

    let result = submit_build_request(
        State(app_state(&test)),
        Path((1, 1)),
        axum::Json(new_request_dto(empire.id, fixtures::MINE, 1)),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 200 OK with the star's outstanding requests
#[tokio::test]
async fn list_returns_requests() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 0.0).await?;
    let star = test.game().insert_star("Alpha").await?;
    let colony = test.game().insert_colony(star.id, 0, empire.id).await?;
    test.game()
        .insert_build_request(&colony, DesignKind::Building, fixtures::MINE, 1, 0.0)
        .await?;

    let result = list_build_requests(State(app_state(&test)), Path(star.id)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 404 Not Found when listing a star that does not exist
#[tokio::test]
async fn list_rejects_unknown_star() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;

    let result = list_build_requests(State(app_state(&test)), Path(42)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 No Content when stopping an outstanding request
#[tokio::test]
async fn stop_returns_no_content() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 0.0).await?;
    let star = test.game().insert_star("Alpha").await?;
    let colony = test.game().insert_colony(star.id, 0, empire.id).await?;
    let request = test
        .game()
        .insert_build_request(&colony, DesignKind::Building, fixtures::MINE, 1, 0.0)
        .await?;

    let result = stop_build_request(State(app_state(&test)), Path((star.id, request.id))).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    Ok(())
}

/// Expect 200 OK when accelerating a funded request
#[tokio::test]
async fn accelerate_returns_updated_request() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 1000.0).await?;
    let star = test.game().insert_star("Alpha").await?;
    let colony = test.game().insert_colony(star.id, 0, empire.id).await?;
    let request = test
        .game()
        .insert_build_request(&colony, DesignKind::Ship, fixtures::FIGHTER, 10, 0.5)
        .await?;

    let result = accelerate_build_request(
        State(app_state(&test)),
        Path((star.id, request.id)),
        axum::Json(AccelerateDto { amount: 0.4 }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 400 Bad Request when the empire cannot cover the cost
#[tokio::test]
async fn accelerate_rejects_insufficient_cash() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let empire = test.game().insert_empire("Terran", 10.0).await?;
    let star = test.game().insert_star("Alpha").await?;
    let colony = test.game().insert_colony(star.id, 0, empire.id).await?;
    let request = test
        .game()
        .insert_build_request(&colony, DesignKind::Ship, fixtures::FIGHTER, 10, 0.5)
        .await?;

    let result = accelerate_build_request(
        State(app_state(&test)),
        Path((star.id, request.id)),
        axum::Json(AccelerateDto { amount: 0.4 }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 404 Not Found when accelerating a request that does not exist
#[tokio::test]
async fn accelerate_rejects_unknown_request() -> Result<(), TestError> {
    let test = test_setup_with_game_tables!()?;
    let star = test.game().insert_star("Alpha").await?;

    let result = accelerate_build_request(
        State(app_state(&test)),
        Path((star.id, 999)),
        axum::Json(AccelerateDto { amount: 0.4 }),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    Ok(())
}
