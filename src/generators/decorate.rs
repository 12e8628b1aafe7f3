use rand::Rng;

use super::{Style, config::GeneratorConfig};
use crate::dungeon::{Cell, Grid, Room};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A wall line splitting a room in two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    pub orientation: Orientation,
    /// Every cell of the line, in order, gap included.
    pub cells: Vec<(u16, u16)>,
}

impl Partition {
    /// The line through the middle of the room, across its shorter side.
    pub fn through(room: &Room) -> Self {
        if room.w > room.h {
            let x = room.x + room.w / 2;
            Partition {
                orientation: Orientation::Vertical,
                cells: (room.y..room.y + room.h).map(|y| (x, y)).collect(),
            }
        } else {
            let y = room.y + room.h / 2;
            Partition {
                orientation: Orientation::Horizontal,
                cells: (room.x..room.x + room.w).map(|x| (x, y)).collect(),
            }
        }
    }
}

/// Rooms that receive a pair of pillars under the light style.
pub fn pillared_rooms<'a>(
    rooms: &'a [Room],
    config: &GeneratorConfig,
) -> impl Iterator<Item = &'a Room> {
    rooms
        .iter()
        .filter(|r| r.w > 5 && r.h > 5)
        .take(config.max_decorated_rooms)
}

/// Rooms that are split by a partition under the ambition style.
pub fn partitioned_rooms<'a>(
    rooms: &'a [Room],
    config: &GeneratorConfig,
) -> impl Iterator<Item = &'a Room> {
    rooms
        .iter()
        .filter(|r| r.w > 6 || r.h > 6)
        .take(config.max_decorated_rooms)
}

/// Applies the decoration of `style` to the carved rooms.
pub fn decorate<R: Rng + ?Sized>(
    grid: &mut Grid,
    style: Style,
    rooms: &[Room],
    config: &GeneratorConfig,
    rng: &mut R,
) {
    if rooms.is_empty() {
        return;
    }

    match style {
        Style::Light => place_pillars(grid, rooms, config),
        Style::Shadow => flood_water(grid, rooms, config, rng),
        Style::Ambition => partition_rooms(grid, rooms, config, rng),
    }
}

/// Stands one pillar above and one below the center of each large room.
fn place_pillars(grid: &mut Grid, rooms: &[Room], config: &GeneratorConfig) {
    for room in pillared_rooms(rooms, config) {
        let (mx, my) = room.center();
        for pillar in [(mx, my - 1), (mx, my + 1)] {
            if grid.get(pillar) == Some(Cell::Floor) {
                grid[pillar] = Cell::Wall;
            }
        }
    }
}

/// Turns randomly sampled room cells into water. Samples landing on anything
/// but floor are wasted.
fn flood_water<R: Rng + ?Sized>(
    grid: &mut Grid,
    rooms: &[Room],
    config: &GeneratorConfig,
    rng: &mut R,
) {
    let mut flooded = 0;
    for _ in 0..config.water_drops {
        let room = &rooms[rng.random_range(0..rooms.len())];
        let cell = (
            room.x + rng.random_range(0..room.w),
            room.y + rng.random_range(0..room.h),
        );
        if grid.get(cell) == Some(Cell::Floor) {
            grid[cell] = Cell::Water;
            flooded += 1;
        }
    }
    tracing::debug!("[decorate] flooded {} cells", flooded);
}

/// Walls off the middle of long rooms, leaving exactly one gap away from
/// the room's corners.
fn partition_rooms<R: Rng + ?Sized>(
    grid: &mut Grid,
    rooms: &[Room],
    config: &GeneratorConfig,
    rng: &mut R,
) {
    for room in partitioned_rooms(rooms, config) {
        let partition = Partition::through(room);
        for &cell in &partition.cells {
            grid[cell] = Cell::Wall;
        }
        // Line ends sit on the room border, so the gap is drawn from the inner cells
        let gap = partition.cells[rng.random_range(1..partition.cells.len() - 1)];
        grid[gap] = Cell::Floor;
    }
}
