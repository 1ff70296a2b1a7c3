use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{
    error::BookingError,
    room::{RoomId, required_text},
    timestamp::Timestamp,
};

/// Identifier assigned to a reservation by the registry, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReservationId(u64);

impl ReservationId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ReservationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A time-bounded claim on a room.
///
/// `end_time` is always strictly after `start_time`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub requester_name: String,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
}

/// A reservation request whose plain fields have been checked.
///
/// The times stay raw until the room has been found, so a request naming an
/// unknown room reports that before any date-time problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    pub(crate) room_id: RoomId,
    pub(crate) requester_name: String,
    pub(crate) start_time: String,
    pub(crate) end_time: String,
}

impl NewReservation {
    pub fn new(
        room_id: RoomId,
        requester_name: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, BookingError> {
        if room_id.get() < 1 {
            return Err(BookingError::invalid_input("roomId must be at least 1"));
        }
        let requester_name = required_text("requesterName", requester_name)?;

        Ok(Self {
            room_id,
            requester_name,
            start_time: start_time.to_owned(),
            end_time: end_time.to_owned(),
        })
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    /// Parses both times and checks the reservation ends strictly after it starts
    pub fn into_reservation(self, id: ReservationId) -> Result<Reservation, BookingError> {
        let NewReservation {
            room_id,
            requester_name,
            start_time,
            end_time,
        } = self;

        let start_time = Timestamp::parse(&start_time)?;
        let end_time = Timestamp::parse(&end_time)?;
        ensure_interval(&start_time, &end_time)?;

        Ok(Reservation {
            id,
            room_id,
            requester_name,
            start_time,
            end_time,
        })
    }
}

/// Fails with `InvalidInterval` unless `end` is strictly after `start`
pub fn ensure_interval(start: &Timestamp, end: &Timestamp) -> Result<(), BookingError> {
    if end.is_after(start) {
        Ok(())
    } else {
        Err(BookingError::InvalidInterval)
    }
}
