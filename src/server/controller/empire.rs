use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    model::{api::ErrorDto, empire::EmpireDto},
    server::{data::empire::EmpireRepository, error::Error, model::app::AppState},
};

pub static EMPIRE_TAG: &str = "empire";

/// Get an empire with its current cash balance
#[utoipa::path(
    get,
    path = "/api/empires/{empire_id}",
    tag = EMPIRE_TAG,
    params(
        ("empire_id" = i32, Path, description = "Empire to fetch")
    ),
    responses(
        (status = 200, description = "Empire account", body = EmpireDto),
        (status = 404, description = "Empire not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_empire(
    State(state): State<AppState>,
    Path(empire_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let empire = EmpireRepository::new(&state.db).get(empire_id).await?;

    let empire = if let Some(empire) = empire {
        empire
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                code: "NotFound".to_string(),
                error: format!("Empire {empire_id} not found"),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(EmpireDto::from(empire))).into_response())
}
