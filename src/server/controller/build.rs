use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{
        api::ErrorDto,
        build::{AccelerateDto, BuildRequestDto, NewBuildRequestDto},
    },
    server::{
        data::star::StarRepository,
        error::Error,
        model::app::AppState,
        service::build::queue::{BuildQueueService, NewBuildRequest},
    },
};

pub static BUILD_TAG: &str = "build";

/// Queue a new build request on a colony
#[utoipa::path(
    post,
    path = "/api/stars/{star_id}/colonies/{colony_id}/build-requests",
    tag = BUILD_TAG,
    params(
        ("star_id" = i32, Path, description = "Star the colony orbits"),
        ("colony_id" = i32, Path, description = "Colony the build targets")
    ),
    request_body = NewBuildRequestDto,
    responses(
        (status = 201, description = "Build request queued", body = BuildRequestDto),
        (status = 400, description = "Dependency or quantity cap violation", body = ErrorDto),
        (status = 404, description = "Star, colony, or design not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_build_request(
    State(state): State<AppState>,
    Path((star_id, colony_id)): Path<(i32, i32)>,
    axum::Json(dto): axum::Json<NewBuildRequestDto>,
) -> Result<impl IntoResponse, Error> {
    let build_queue = BuildQueueService::new(&state.db, state.catalog.as_ref());

    let model = build_queue
        .submit(NewBuildRequest {
            star_id,
            colony_id,
            empire_id: dto.empire_id,
            design_kind: dto.design_kind,
            design_id: dto.design_id,
            count: dto.count,
            existing_building_id: dto.existing_building_id,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        axum::Json(BuildRequestDto::from(model)),
    ))
}

/// Get all outstanding build requests for a star
#[utoipa::path(
    get,
    path = "/api/stars/{star_id}/build-requests",
    tag = BUILD_TAG,
    params(
        ("star_id" = i32, Path, description = "Star to list requests for")
    ),
    responses(
        (status = 200, description = "Outstanding build requests, soonest completion first", body = Vec<BuildRequestDto>),
        (status = 404, description = "Star not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_build_requests(
    State(state): State<AppState>,
    Path(star_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let star = StarRepository::new(&state.db).get_star(star_id).await?;

    let star = if let Some(star) = star {
        star
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                code: "NotFound".to_string(),
                error: format!("Star {star_id} not found"),
            }),
        )
            .into_response());
    };

    let build_requests: Vec<BuildRequestDto> = star
        .build_requests
        .into_iter()
        .map(BuildRequestDto::from)
        .collect();

    Ok((StatusCode::OK, axum::Json(build_requests)).into_response())
}

/// Stop a build request, removing it from the queue
#[utoipa::path(
    delete,
    path = "/api/stars/{star_id}/build-requests/{request_id}",
    tag = BUILD_TAG,
    params(
        ("star_id" = i32, Path, description = "Star the request belongs to"),
        ("request_id" = i32, Path, description = "Build request to stop")
    ),
    responses(
        (status = 204, description = "Build request stopped; also returned when it was already gone"),
        (status = 404, description = "Star not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stop_build_request(
    State(state): State<AppState>,
    Path((star_id, request_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    let star = StarRepository::new(&state.db).get_star(star_id).await?;

    let mut star = if let Some(star) = star {
        star
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                code: "NotFound".to_string(),
                error: format!("Star {star_id} not found"),
            }),
        )
            .into_response());
    };

    let build_queue = BuildQueueService::new(&state.db, state.catalog.as_ref());
    build_queue.stop(&mut star, request_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

/// Pay cash to instantly complete a fraction of a build's remaining progress
#[utoipa::path(
    post,
    path = "/api/stars/{star_id}/build-requests/{request_id}/accelerate",
    tag = BUILD_TAG,
    params(
        ("star_id" = i32, Path, description = "Star the request belongs to"),
        ("request_id" = i32, Path, description = "Build request to accelerate")
    ),
    request_body = AccelerateDto,
    responses(
        (status = 200, description = "Updated build request", body = BuildRequestDto),
        (status = 400, description = "Insufficient cash", body = ErrorDto),
        (status = 404, description = "Build request not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn accelerate_build_request(
    State(state): State<AppState>,
    Path((_star_id, request_id)): Path<(i32, i32)>,
    axum::Json(dto): axum::Json<AccelerateDto>,
) -> Result<impl IntoResponse, Error> {
    let build_queue = BuildQueueService::new(&state.db, state.catalog.as_ref());

    let model = build_queue.accelerate(request_id, dto.amount).await?;

    Ok((StatusCode::OK, axum::Json(BuildRequestDto::from(model))))
}
