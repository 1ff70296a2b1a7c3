pub mod reservation;
pub mod room;

use serde::Serialize;
use utoipa::ToSchema;

/// Body returned when a room or reservation is created
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    pub id: u64,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            message: "Created".to_string(),
        }
    }
}
