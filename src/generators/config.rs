use thiserror::Error;

use crate::dungeon::MAP_HEIGHT;

/// A room needs a one-cell border around at least one interior cell.
const SMALLEST_ROOM: u16 = 3;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum room size {0} is below {SMALLEST_ROOM}")]
    RoomTooSmall(u16),
    #[error("minimum room size {min} exceeds maximum room size {max}")]
    InvertedRoomSizes { min: u16, max: u16 },
    #[error("maximum room size {0} does not fit inside a {MAP_HEIGHT}-row map")]
    RoomTooLarge(u16),
}

/// Tunables for the randomized pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Smallest room side, inclusive.
    pub min_room_size: u16,
    /// Largest room side, inclusive.
    pub max_room_size: u16,
    /// Number of room candidates proposed per attempt.
    pub max_rooms: u32,
    /// Fewer accepted rooms than this fails the attempt.
    pub min_rooms: usize,
    /// Number of full pipeline runs before falling back.
    pub max_attempts: u32,
    /// Number of water samples thrown by the shadow style.
    pub water_drops: u32,
    /// Rooms receiving pillars or partitions.
    pub max_decorated_rooms: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_room_size: 4,
            max_room_size: 9,
            max_rooms: 15,
            min_rooms: 4,
            max_attempts: 50,
            water_drops: 25,
            max_decorated_rooms: 2,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_room_size < SMALLEST_ROOM {
            return Err(ConfigError::RoomTooSmall(self.min_room_size));
        }
        if self.min_room_size > self.max_room_size {
            return Err(ConfigError::InvertedRoomSizes {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        // Border ring on both sides plus at least one free row for placement
        if self.max_room_size + 3 > MAP_HEIGHT {
            return Err(ConfigError::RoomTooLarge(self.max_room_size));
        }
        Ok(())
    }
}
