use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::error::BookingError;

/// Identifier assigned to a room by the registry, starting at 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoomId(u64);

impl RoomId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// A bookable meeting room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    /// Trimmed display name, unique ignoring case
    pub name: String,
    /// Number of people the room seats, at least 1
    pub capacity: u32,
    pub location: String,
}

impl Room {
    /// Key used for the case-insensitive uniqueness check
    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }
}

/// A validated request to create a room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRoom {
    pub(crate) name: String,
    pub(crate) capacity: u32,
    pub(crate) location: String,
}

impl NewRoom {
    /// Trims the text fields and checks that nothing is empty and capacity is at least 1
    pub fn new(name: &str, capacity: u32, location: &str) -> Result<Self, BookingError> {
        let name = required_text("name", name)?;
        let location = required_text("location", location)?;
        if capacity < 1 {
            return Err(BookingError::invalid_input("capacity must be at least 1"));
        }

        Ok(Self {
            name,
            capacity,
            location,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn name_key(&self) -> String {
        name_key(&self.name)
    }

    pub fn into_room(self, id: RoomId) -> Room {
        let NewRoom {
            name,
            capacity,
            location,
        } = self;
        Room {
            id,
            name,
            capacity,
            location,
        }
    }
}

fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Returns `value` trimmed, or `InvalidInput` naming `field` if nothing is left
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, BookingError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BookingError::invalid_input(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_owned())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new_room_trims_fields() {
        let room = NewRoom::new("  Sala A ", 4, "\tPiso 1\n").unwrap();
        assert_eq!(room.name(), "Sala A");

        let room = room.into_room(RoomId::new(1));
        assert_eq!(room.location, "Piso 1");
        assert_eq!(room.capacity, 4);
        assert_eq!(room.id.get(), 1);
    }

    #[test]
    fn test_new_room_rejects_blank_text() {
        let err = NewRoom::new("   ", 4, "Piso 1").unwrap_err();
        assert_eq!(err, BookingError::invalid_input("name must not be empty"));

        let err = NewRoom::new("Sala A", 4, "").unwrap_err();
        assert_eq!(err, BookingError::invalid_input("location must not be empty"));
    }

    #[test]
    fn test_new_room_rejects_zero_capacity() {
        let err = NewRoom::new("Sala A", 0, "Piso 1").unwrap_err();
        assert!(matches!(err, BookingError::InvalidInput(_)));
    }

    #[test]
    fn test_name_key_ignores_case_and_whitespace() {
        let a = NewRoom::new("Alpha", 1, "x").unwrap();
        let b = NewRoom::new("  alpha ", 1, "y").unwrap();
        assert_eq!(a.name_key(), b.name_key());
    }
}
