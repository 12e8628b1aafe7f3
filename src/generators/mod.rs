use std::{fmt, str::FromStr};

use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod config;
pub mod decorate;
pub mod fallback;
pub mod rooms;
pub mod tunnels;

pub use config::{ConfigError, GeneratorConfig};
pub use fallback::fallback_layout;

use crate::{
    dungeon::{Cell, DungeonLayout, Grid, LayoutOrigin, ObjectKind, Position, Room},
    solvers::is_reachable,
};
use decorate::decorate;
use rooms::place_rooms;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Decorative profile applied once rooms and tunnels are carved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Symmetrical pillars in the larger rooms.
    Light,
    /// Puddles of water scattered through the rooms.
    Shadow,
    /// Partition walls splitting long rooms, each with a single gap.
    Ambition,
}

impl Style {
    pub const ALL: [Style; 3] = [Style::Light, Style::Shadow, Style::Ambition];
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Style::Light => write!(f, "light"),
            Style::Shadow => write!(f, "shadow"),
            Style::Ambition => write!(f, "ambition"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown style {0:?}, expected one of light, shadow, ambition")]
pub struct ParseStyleError(String);

impl FromStr for Style {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Style::Light),
            "shadow" => Ok(Style::Shadow),
            "ambition" => Ok(Style::Ambition),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Why an attempt was thrown away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RetryReason {
    TooFewRooms { placed: usize },
    TooFewFloorCells { found: usize },
    Unreachable,
}

impl fmt::Display for RetryReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RetryReason::TooFewRooms { placed } => write!(f, "only {placed} rooms placed"),
            RetryReason::TooFewFloorCells { found } => {
                write!(f, "only {found} interior floor cells")
            }
            RetryReason::Unreachable => write!(f, "objects unreachable from the start"),
        }
    }
}

/// The player start plus the three objects.
const SPECIAL_CELLS: usize = 4;

#[derive(Debug, Clone, Default)]
pub struct DungeonGenerator {
    config: GeneratorConfig,
}

impl DungeonGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(DungeonGenerator { config })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Runs the randomized pipeline until it yields a layout whose objects are all
    /// reachable from the player start, or returns the fallback layout once
    /// `max_attempts` runs have failed.
    pub fn generate<R: Rng + ?Sized>(&self, style: Style, rng: &mut R) -> DungeonLayout {
        for attempt in 1..=self.config.max_attempts {
            match self.attempt(style, attempt, rng) {
                Ok(layout) => {
                    tracing::info!(
                        "[generator] {} layout ready after {} attempt(s) with {} rooms",
                        style,
                        attempt,
                        layout.rooms().len()
                    );
                    return layout;
                }
                Err(reason) => {
                    tracing::debug!("[generator] attempt {} retrying: {}", attempt, reason);
                }
            }
        }

        tracing::warn!(
            "[generator] {} generation failed after {} attempts, using fallback layout",
            style,
            self.config.max_attempts
        );
        fallback_layout()
    }

    /// One run from a blank grid: place, carve, decorate, pick special cells, validate.
    fn attempt<R: Rng + ?Sized>(
        &self,
        style: Style,
        attempt: u32,
        rng: &mut R,
    ) -> Result<DungeonLayout, RetryReason> {
        let mut grid = Grid::blank();

        let rooms = place_rooms(&mut grid, &self.config, rng);
        if rooms.len() < self.config.min_rooms {
            return Err(RetryReason::TooFewRooms {
                placed: rooms.len(),
            });
        }

        decorate(&mut grid, style, &rooms, &self.config, rng);

        let mut pool = floor_pool(&grid, &rooms);
        if pool.len() < SPECIAL_CELLS {
            return Err(RetryReason::TooFewFloorCells { found: pool.len() });
        }
        pool.shuffle(rng);

        // Draw from the back of the shuffled pool
        let picks = &pool[pool.len() - SPECIAL_CELLS..];
        let (player_start, door, monster, chest) = (picks[3], picks[2], picks[1], picks[0]);

        if !is_reachable(&grid, player_start, &[door, monster, chest]) {
            return Err(RetryReason::Unreachable);
        }

        Ok(DungeonLayout::build(
            grid,
            [
                (ObjectKind::Door, door),
                (ObjectKind::Monster, monster),
                (ObjectKind::Chest, chest),
            ],
            player_start,
            rooms,
            LayoutOrigin::Generated { attempt },
        ))
    }
}

/// Floor cells strictly inside any room, in room order.
fn floor_pool(grid: &Grid, rooms: &[Room]) -> Vec<Position> {
    rooms
        .iter()
        .flat_map(|room| room.interior_cells())
        .filter(|&c| grid[c] == Cell::Floor)
        .map(Position::from)
        .collect()
}

/// Generates a layout with the default configuration, optionally seeded for reproducibility.
pub fn generate_dungeon(style: Style, seed: Option<u64>) -> DungeonLayout {
    let mut rng = get_rng(seed);
    DungeonGenerator::default().generate(style, &mut rng)
}
