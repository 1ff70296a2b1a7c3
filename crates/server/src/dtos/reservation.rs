use models::Reservation;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationResponse {
    pub id: u64,
    pub room_id: u64,
    pub requester_name: String,
    /// ISO-8601, exactly as submitted
    pub start_time: String,
    /// ISO-8601, exactly as submitted
    pub end_time: String,
}

impl From<&Reservation> for ReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id.get(),
            room_id: reservation.room_id.get(),
            requester_name: reservation.requester_name.clone(),
            start_time: reservation.start_time.to_string(),
            end_time: reservation.end_time.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservationRequest {
    #[schema(minimum = 1)]
    pub room_id: u64,
    #[schema(min_length = 1)]
    pub requester_name: String,
    #[schema(example = "2026-01-20T10:00:00")]
    pub start_time: String,
    #[schema(example = "2026-01-20T11:00:00")]
    pub end_time: String,
}

/// Only the end time of a reservation can be changed; other fields are ignored
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchReservationRequest {
    #[schema(example = "2026-01-20T12:00:00")]
    pub end_time: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchReservationResponse {
    pub id: u64,
    pub message: String,
    pub end_time: String,
}

impl From<&Reservation> for PatchReservationResponse {
    fn from(reservation: &Reservation) -> Self {
        Self {
            id: reservation.id.get(),
            message: "Updated".to_string(),
            end_time: reservation.end_time.to_string(),
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ReservationQueryParams {
    /// Only return reservations for this room
    pub room_id: Option<u64>,
}
