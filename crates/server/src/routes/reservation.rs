use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use database::Connection;
use models::{NewReservation, ReservationId, RoomId};

use crate::{
    dtos::{
        CreatedResponse,
        reservation::{
            CreateReservationRequest, PatchReservationRequest, PatchReservationResponse,
            ReservationQueryParams, ReservationResponse,
        },
    },
    error::{ApiError, ErrorResponse},
};

/// List reservations, optionally only those of one room
#[utoipa::path(
    get,
    path = "/reservations",
    params(ReservationQueryParams),
    responses(
        (status = 200, description = "Reservations in creation order", body = [ReservationResponse]),
        (status = 400, description = "Malformed query string", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn list_reservations(
    State(conn): State<Connection>,
    params: Result<Query<ReservationQueryParams>, QueryRejection>,
) -> Result<Json<Vec<ReservationResponse>>, ApiError> {
    let Query(params) = params?;
    let room_filter = params.room_id.map(RoomId::new);

    let db = conn.lock().await;
    Ok(Json(
        db.reservations
            .list(room_filter)
            .map(ReservationResponse::from)
            .collect(),
    ))
}

/// Book a room for a time interval
#[utoipa::path(
    post,
    path = "/reservations",
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = CreatedResponse),
        (status = 400, description = "Unknown room, end not after start, or invalid fields", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn create_reservation(
    State(conn): State<Connection>,
    payload: Result<Json<CreateReservationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let Json(req) = payload?;
    let new_reservation = NewReservation::new(
        RoomId::new(req.room_id),
        &req.requester_name,
        &req.start_time,
        &req.end_time,
    )?;

    let id = conn.lock().await.create_reservation(new_reservation)?;
    Ok((StatusCode::CREATED, Json(CreatedResponse::new(id.get()))))
}

/// Change when a reservation ends
#[utoipa::path(
    patch,
    path = "/reservations/{id}",
    params(
        ("id" = u64, Path, description = "Reservation ID")
    ),
    request_body = PatchReservationRequest,
    responses(
        (status = 200, description = "End time updated", body = PatchReservationResponse),
        (status = 400, description = "End not after start, or invalid date-time", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn patch_reservation(
    State(conn): State<Connection>,
    id: Result<Path<u64>, PathRejection>,
    payload: Result<Json<PatchReservationRequest>, JsonRejection>,
) -> Result<Json<PatchReservationResponse>, ApiError> {
    let Path(id) = id?;
    let Json(req) = payload?;

    let mut db = conn.lock().await;
    let reservation = db
        .reservations
        .patch_end(ReservationId::new(id), &req.end_time)?;
    Ok(Json(PatchReservationResponse::from(reservation)))
}

/// Cancel a reservation
#[utoipa::path(
    delete,
    path = "/reservations/{id}",
    params(
        ("id" = u64, Path, description = "Reservation ID")
    ),
    responses(
        (status = 204, description = "Reservation cancelled"),
        (status = 400, description = "Malformed reservation id", body = ErrorResponse),
        (status = 404, description = "Reservation not found", body = ErrorResponse)
    ),
    tag = "Reservations"
)]
pub async fn cancel_reservation(
    State(conn): State<Connection>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    conn.lock().await.reservations.delete(ReservationId::new(id))?;
    Ok(StatusCode::NO_CONTENT)
}
