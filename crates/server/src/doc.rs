use utoipa::OpenApi;

/// API Documentation
///
/// Paths are collected from the router; this only carries the metadata.
#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Rooms", description = "Meeting room catalog"),
        (name = "Reservations", description = "Room bookings"),
        (name = "Health", description = "Service status"),
    ),
    info(
        title = "CoWork Manager API",
        version = "1.0.0",
        description = "Meeting rooms and reservations for a coworking space",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
