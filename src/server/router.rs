//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa specifications,
//! and Swagger UI serves the resulting document at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
///
/// # Registered Endpoints
/// - `POST /api/stars/{star_id}/colonies/{colony_id}/build-requests` - Queue a build
/// - `GET /api/stars/{star_id}/build-requests` - List a star's outstanding builds
/// - `DELETE /api/stars/{star_id}/build-requests/{request_id}` - Stop a build
/// - `POST /api/stars/{star_id}/build-requests/{request_id}/accelerate` - Accelerate a build
/// - `GET /api/empires/{empire_id}` - Get an empire's cash balance
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Starhold", description = "Starhold API"), tags(
        (name = controller::build::BUILD_TAG, description = "Build queue API routes"),
        (name = controller::empire::EMPIRE_TAG, description = "Empire API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::build::submit_build_request))
        .routes(routes!(controller::build::list_build_requests))
        .routes(routes!(controller::build::stop_build_request))
        .routes(routes!(controller::build::accelerate_build_request))
        .routes(routes!(controller::empire::get_empire))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
