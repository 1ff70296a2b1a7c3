use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use database::Connection;
use models::{NewRoom, RoomId};

use crate::{
    dtos::{
        CreatedResponse,
        room::{CreateRoomRequest, RoomResponse},
    },
    error::{ApiError, ErrorResponse},
};

/// List every room in the order it was created
#[utoipa::path(
    get,
    path = "/rooms",
    responses(
        (status = 200, description = "All rooms", body = [RoomResponse])
    ),
    tag = "Rooms"
)]
pub async fn list_rooms(State(conn): State<Connection>) -> Json<Vec<RoomResponse>> {
    let db = conn.lock().await;
    Json(db.rooms.list().map(RoomResponse::from).collect())
}

/// Get a room by ID
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    params(
        ("id" = u64, Path, description = "Room ID")
    ),
    responses(
        (status = 200, description = "Room found", body = RoomResponse),
        (status = 400, description = "Malformed room id", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn get_room(
    State(conn): State<Connection>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<RoomResponse>, ApiError> {
    let Path(id) = id?;
    let db = conn.lock().await;
    let room = db.rooms.get(RoomId::new(id))?;
    Ok(Json(RoomResponse::from(room)))
}

/// Create a room; names must be unique ignoring case
#[utoipa::path(
    post,
    path = "/rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = CreatedResponse),
        (status = 400, description = "Duplicate name or invalid fields", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn create_room(
    State(conn): State<Connection>,
    payload: Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let new_room = NewRoom::new(&req.name, req.capacity, &req.location)?;

    let id = conn.lock().await.rooms.create(new_room)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id.get()))))
}

/// Delete a room along with all of its reservations
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    params(
        ("id" = u64, Path, description = "Room ID")
    ),
    responses(
        (status = 204, description = "Room and its reservations deleted"),
        (status = 400, description = "Malformed room id", body = ErrorResponse),
        (status = 404, description = "Room not found", body = ErrorResponse)
    ),
    tag = "Rooms"
)]
pub async fn delete_room(
    State(conn): State<Connection>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    conn.lock().await.delete_room(RoomId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}
