use std::sync::Arc;

use models::{BookingError, NewReservation, ReservationId, RoomId};
use tokio::sync::Mutex;

use crate::services::{ReservationRegistry, RoomRegistry};

/// Shared handle to the in-memory database.
///
/// One lock guards both registries, so every operation sees rooms and
/// reservations in a consistent state.
pub type Connection = Arc<Mutex<Database>>;

/// All rooms and reservations known to the process
#[derive(Debug, Default)]
pub struct Database {
    pub rooms: RoomRegistry,
    pub reservations: ReservationRegistry,
}

impl Database {
    pub fn new() -> Self {
        Self::default()
    }

    /// Books a room, checking the room against this database's rooms
    pub fn create_reservation(
        &mut self,
        new_reservation: NewReservation,
    ) -> Result<ReservationId, BookingError> {
        self.reservations.create(&self.rooms, new_reservation)
    }

    /// Deletes a room and cascades to its reservations
    pub fn delete_room(&mut self, id: RoomId) -> Result<usize, BookingError> {
        self.rooms.delete(id, &mut self.reservations)
    }
}

/// Creates a connection to a fresh, empty database
pub fn create_connection() -> Connection {
    Arc::new(Mutex::new(Database::new()))
}
