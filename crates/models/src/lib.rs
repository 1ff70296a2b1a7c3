pub mod error;
pub mod reservation;
pub mod room;
pub mod timestamp;

pub use error::{BookingError, ErrorKind};
pub use reservation::{NewReservation, Reservation, ReservationId};
pub use room::{NewRoom, Room, RoomId};
pub use timestamp::Timestamp;
