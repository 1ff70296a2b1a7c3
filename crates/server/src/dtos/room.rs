use models::Room;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: u64,
    pub name: String,
    pub capacity: u32,
    pub location: String,
}

impl From<&Room> for RoomResponse {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.get(),
            name: room.name.clone(),
            capacity: room.capacity,
            location: room.location.clone(),
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRoomRequest {
    /// Must be unique, ignoring case and surrounding whitespace
    #[schema(min_length = 1)]
    pub name: String,
    #[schema(minimum = 1)]
    pub capacity: u32,
    #[schema(min_length = 1)]
    pub location: String,
}
