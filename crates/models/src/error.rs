use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::{reservation::ReservationId, room::RoomId};

/// Everything that can go wrong while managing rooms and reservations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// A field is missing, empty, out of range or not a valid date-time
    #[error("{0}")]
    InvalidInput(String),

    /// Another room already uses this name (case-insensitive)
    #[error("a room named {0:?} already exists")]
    DuplicateName(String),

    /// A reservation referenced a room that does not exist
    #[error("room {0} does not exist")]
    UnknownRoom(RoomId),

    /// The reservation would end at or before its start
    #[error("endTime must be after startTime")]
    InvalidInterval,

    #[error("room {0} not found")]
    RoomNotFound(RoomId),

    #[error("reservation {0} not found")]
    ReservationNotFound(ReservationId),
}

impl BookingError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Collapses the error into the coarse taxonomy exposed to clients
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::DuplicateName(_) => ErrorKind::DuplicateName,
            Self::UnknownRoom(_) => ErrorKind::UnknownRoom,
            Self::InvalidInterval => ErrorKind::InvalidInterval,
            Self::RoomNotFound(_) | Self::ReservationNotFound(_) => ErrorKind::NotFound,
        }
    }
}

/// Machine-readable category of a [`BookingError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    DuplicateName,
    UnknownRoom,
    InvalidInterval,
    NotFound,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InvalidInput => "INVALID_INPUT",
            Self::DuplicateName => "DUPLICATE_NAME",
            Self::UnknownRoom => "UNKNOWN_ROOM",
            Self::InvalidInterval => "INVALID_INTERVAL",
            Self::NotFound => "NOT_FOUND",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_not_found_variants_share_kind() {
        assert_eq!(BookingError::RoomNotFound(RoomId::new(3)).kind(), ErrorKind::NotFound);
        assert_eq!(
            BookingError::ReservationNotFound(ReservationId::new(3)).kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BookingError::DuplicateName("Alpha".to_string()).to_string(),
            "a room named \"Alpha\" already exists"
        );
        assert_eq!(
            BookingError::UnknownRoom(RoomId::new(9999)).to_string(),
            "room 9999 does not exist"
        );
        assert_eq!(ErrorKind::InvalidInterval.to_string(), "INVALID_INTERVAL");
    }
}
