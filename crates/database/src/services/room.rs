use std::collections::BTreeMap;

use log::info;
use models::{BookingError, NewRoom, Room, RoomId};

use crate::services::reservation::ReservationRegistry;

/// Owns every room.
///
/// Ids are handed out in increasing order, so iterating the map yields rooms
/// in the order they were created.
#[derive(Debug)]
pub struct RoomRegistry {
    rooms: BTreeMap<RoomId, Room>,
    next_id: u64,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self {
            rooms: BTreeMap::new(),
            next_id: 1,
        }
    }

    pub fn list(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn get(&self, id: RoomId) -> Result<&Room, BookingError> {
        self.rooms.get(&id).ok_or(BookingError::RoomNotFound(id))
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Stores a new room, rejecting names already taken by another room
    /// once both are trimmed and lower-cased
    pub fn create(&mut self, new_room: NewRoom) -> Result<RoomId, BookingError> {
        let key = new_room.name_key();
        if self.rooms.values().any(|room| room.name_key() == key) {
            return Err(BookingError::DuplicateName(new_room.name().to_owned()));
        }

        let id = RoomId::new(self.next_id);
        self.next_id += 1;

        let room = new_room.into_room(id);
        info!("Created room {id} ({:?})", room.name);
        self.rooms.insert(id, room);

        Ok(id)
    }

    /// Removes a room together with every reservation made against it.
    ///
    /// `reservations` is the registry holding those reservations; it is only
    /// touched once the room is known to exist. Returns how many reservations
    /// were cascaded.
    pub fn delete(
        &mut self,
        id: RoomId,
        reservations: &mut ReservationRegistry,
    ) -> Result<usize, BookingError> {
        let room = self.rooms.remove(&id).ok_or(BookingError::RoomNotFound(id))?;
        let cascaded = reservations.delete_for_room(room.id);

        info!(
            "Deleted room {id} ({:?}) and {cascaded} reservation(s)",
            room.name
        );
        Ok(cascaded)
    }
}
