pub mod reservation;
pub mod room;

pub use reservation::ReservationRegistry;
pub use room::RoomRegistry;
