use std::collections::BTreeMap;

use log::info;
use models::{
    BookingError, NewReservation, Reservation, ReservationId, RoomId, Timestamp,
    reservation::ensure_interval,
};

use crate::services::room::RoomRegistry;

/// Owns every reservation.
///
/// Reservations refer to rooms by id only; the room registry is consulted for
/// existence when a reservation is created and purges reservations through
/// [`ReservationRegistry::delete_for_room`] when a room goes away.
#[derive(Debug)]
pub struct ReservationRegistry {
    reservations: BTreeMap<ReservationId, Reservation>,
    next_id: u64,
}

impl Default for ReservationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationRegistry {
    pub fn new() -> Self {
        Self {
            reservations: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Lists reservations in creation order, optionally only those of one room.
    /// An unknown room simply yields nothing.
    pub fn list(&self, room_filter: Option<RoomId>) -> impl Iterator<Item = &Reservation> {
        self.reservations
            .values()
            .filter(move |reservation| room_filter.is_none_or(|id| reservation.room_id == id))
    }

    pub fn get(&self, id: ReservationId) -> Result<&Reservation, BookingError> {
        self.reservations
            .get(&id)
            .ok_or(BookingError::ReservationNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    pub fn create(
        &mut self,
        rooms: &RoomRegistry,
        new_reservation: NewReservation,
    ) -> Result<ReservationId, BookingError> {
        let room_id = new_reservation.room_id();
        if !rooms.contains(room_id) {
            return Err(BookingError::UnknownRoom(room_id));
        }

        // The counter only moves once the times are known to be valid
        let id = ReservationId::new(self.next_id);
        let reservation = new_reservation.into_reservation(id)?;
        self.next_id += 1;

        info!("Created reservation {id} for room {room_id}");
        self.reservations.insert(id, reservation);

        Ok(id)
    }

    /// Moves the end of a reservation. The new end is checked against the
    /// start the reservation was created with; nothing else changes.
    pub fn patch_end(
        &mut self,
        id: ReservationId,
        new_end: &str,
    ) -> Result<&Reservation, BookingError> {
        let reservation = self
            .reservations
            .get_mut(&id)
            .ok_or(BookingError::ReservationNotFound(id))?;

        let new_end = Timestamp::parse(new_end)?;
        ensure_interval(&reservation.start_time, &new_end)?;

        info!("Reservation {id} now ends at {new_end}");
        reservation.end_time = new_end;

        Ok(&*reservation)
    }

    pub fn delete(&mut self, id: ReservationId) -> Result<Reservation, BookingError> {
        let reservation = self
            .reservations
            .remove(&id)
            .ok_or(BookingError::ReservationNotFound(id))?;

        info!("Cancelled reservation {id}");
        Ok(reservation)
    }

    /// Drops every reservation of `room_id` and returns how many there were
    pub fn delete_for_room(&mut self, room_id: RoomId) -> usize {
        let before = self.reservations.len();
        self.reservations
            .retain(|_, reservation| reservation.room_id != room_id);
        before - self.reservations.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::NewRoom;

    fn setup() -> (RoomRegistry, ReservationRegistry, RoomId) {
        let mut rooms = RoomRegistry::new();
        let room_id = rooms
            .create(NewRoom::new("Sala A", 4, "Piso 1").unwrap())
            .unwrap();
        (rooms, ReservationRegistry::new(), room_id)
    }

    fn booking(room_id: RoomId, start: &str, end: &str) -> NewReservation {
        NewReservation::new(room_id, "Ana", start, end).unwrap()
    }

    #[test]
    fn test_create_stores_raw_times() {
        let (rooms, mut reservations, room_id) = setup();
        let id = reservations
            .create(
                &rooms,
                booking(room_id, "2026-01-20T10:00:00", "2026-01-20T11:00:00+00:00"),
            )
            .unwrap();
        assert_eq!(id, ReservationId::new(1));

        let stored = reservations.get(id).unwrap();
        assert_eq!(stored.room_id, room_id);
        assert_eq!(stored.start_time.as_str(), "2026-01-20T10:00:00");
        assert_eq!(stored.end_time.as_str(), "2026-01-20T11:00:00+00:00");
    }

    #[test]
    fn test_create_against_unknown_room_persists_nothing() {
        let (rooms, mut reservations, _) = setup();
        let err = reservations
            .create(
                &rooms,
                booking(
                    RoomId::new(9999),
                    "2026-01-20T10:00:00",
                    "2026-01-20T11:00:00",
                ),
            )
            .unwrap_err();

        assert_eq!(err, BookingError::UnknownRoom(RoomId::new(9999)));
        assert!(reservations.is_empty());
    }

    #[test]
    fn test_unknown_room_is_reported_before_bad_interval() {
        let (rooms, mut reservations, _) = setup();
        let err = reservations
            .create(
                &rooms,
                booking(RoomId::new(2), "2026-01-20T10:00:00", "2026-01-20T09:00:00"),
            )
            .unwrap_err();
        assert_eq!(err, BookingError::UnknownRoom(RoomId::new(2)));
    }

    #[test]
    fn test_unknown_room_is_reported_before_bad_times() {
        let (rooms, mut reservations, _) = setup();
        let err = reservations
            .create(&rooms, booking(RoomId::new(2), "yesterday", "2026-01-20T09:00:00"))
            .unwrap_err();
        assert_eq!(err, BookingError::UnknownRoom(RoomId::new(2)));
    }

    #[test]
    fn test_create_rejects_unparsable_times() {
        let (rooms, mut reservations, room_id) = setup();
        let err = reservations
            .create(&rooms, booking(room_id, "2026-01-20T10:00:00", "2026-1-20T11:00"))
            .unwrap_err();
        assert!(matches!(err, BookingError::InvalidInput(_)));
        assert!(reservations.is_empty());
    }

    #[test]
    fn test_create_rejects_end_not_after_start() {
        let (rooms, mut reservations, room_id) = setup();
        for end in ["2026-01-20T10:00:00", "2026-01-20T09:59:59"] {
            let err = reservations
                .create(&rooms, booking(room_id, "2026-01-20T10:00:00", end))
                .unwrap_err();
            assert_eq!(err, BookingError::InvalidInterval);
        }
        assert!(reservations.is_empty());

        // Failed attempts do not consume ids
        let id = reservations
            .create(
                &rooms,
                booking(room_id, "2026-01-20T10:00:00", "2026-01-20T10:30:00"),
            )
            .unwrap();
        assert_eq!(id, ReservationId::new(1));
    }

    #[test]
    fn test_list_filters_by_room() {
        let (mut rooms, mut reservations, a) = setup();
        let b = rooms
            .create(NewRoom::new("Sala B", 2, "Piso 2").unwrap())
            .unwrap();
        for room_id in [a, b, a] {
            reservations
                .create(
                    &rooms,
                    booking(room_id, "2026-01-20T10:00:00", "2026-01-20T11:00:00"),
                )
                .unwrap();
        }

        let ids: Vec<_> = reservations.list(Some(a)).map(|r| r.id.get()).collect();
        assert_eq!(ids, [1, 3]);

        // Same answer when asked again with no writes in between
        let again: Vec<_> = reservations.list(Some(a)).map(|r| r.id.get()).collect();
        assert_eq!(ids, again);

        assert_eq!(reservations.list(None).count(), 3);
        assert_eq!(reservations.list(Some(RoomId::new(77))).count(), 0);
    }

    #[test]
    fn test_patch_end_validates_against_original_start() {
        let (rooms, mut reservations, room_id) = setup();
        let id = reservations
            .create(
                &rooms,
                booking(room_id, "2026-01-20T10:00:00", "2026-01-20T11:00:00"),
            )
            .unwrap();

        for end in ["2026-01-20T09:00:00", "2026-01-20T10:00:00"] {
            let err = reservations.patch_end(id, end).unwrap_err();
            assert_eq!(err, BookingError::InvalidInterval, "end {end}");
        }
        assert_eq!(
            reservations.get(id).unwrap().end_time.as_str(),
            "2026-01-20T11:00:00"
        );

        let updated = reservations.patch_end(id, "2026-01-20T12:00:00").unwrap();
        assert_eq!(updated.end_time.as_str(), "2026-01-20T12:00:00");
        assert_eq!(updated.start_time.as_str(), "2026-01-20T10:00:00");
        assert_eq!(updated.requester_name, "Ana");

        // Shrinking back is fine as long as it stays after the start
        let updated = reservations.patch_end(id, "2026-01-20T10:15:00").unwrap();
        assert_eq!(updated.end_time.as_str(), "2026-01-20T10:15:00");
    }

    #[test]
    fn test_patch_end_error_order() {
        let (rooms, mut reservations, room_id) = setup();

        let err = reservations
            .patch_end(ReservationId::new(5), "garbage")
            .unwrap_err();
        assert_eq!(err, BookingError::ReservationNotFound(ReservationId::new(5)));

        let id = reservations
            .create(
                &rooms,
                booking(room_id, "2026-01-20T10:00:00", "2026-01-20T11:00:00"),
            )
            .unwrap();
        let err = reservations.patch_end(id, "garbage").unwrap_err();
        assert!(matches!(err, BookingError::InvalidInput(_)));
    }

    #[test]
    fn test_delete() {
        let (rooms, mut reservations, room_id) = setup();
        let id = reservations
            .create(
                &rooms,
                booking(room_id, "2026-01-20T10:00:00", "2026-01-20T11:00:00"),
            )
            .unwrap();

        assert_eq!(reservations.delete(id).unwrap().id, id);
        assert_eq!(
            reservations.delete(id).unwrap_err(),
            BookingError::ReservationNotFound(id)
        );
    }
}
