pub mod health;
pub mod reservation;
pub mod room;

use axum::Router;
use database::Connection;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::doc::ApiDoc;

/// Prefix shared by every booking endpoint
pub const API_PREFIX: &str = "/api/v1";

/// Builds the full application: booking API, health check, OpenAPI document and Swagger UI
pub fn app(conn: Connection) -> Router {
    let api = OpenApiRouter::<Connection>::new()
        .routes(routes!(room::list_rooms, room::create_room))
        .routes(routes!(room::get_room, room::delete_room))
        .routes(routes!(
            reservation::list_reservations,
            reservation::create_reservation
        ))
        .routes(routes!(
            reservation::patch_reservation,
            reservation::cancel_reservation
        ));

    let (router, openapi) = OpenApiRouter::<Connection>::with_openapi(ApiDoc::openapi())
        .routes(routes!(health::health))
        .nest(API_PREFIX, api)
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi))
        .with_state(conn)
        .layer(ServiceBuilder::new().layer(CompressionLayer::new()))
}
