use rand::Rng;

use super::{config::GeneratorConfig, tunnels::connect_rooms};
use crate::dungeon::{Grid, Room};

/// Proposes up to `max_rooms` random rooms, carving every accepted one together with a
/// corridor back to the room accepted before it.
///
/// Candidates overlapping an accepted room (with its one-cell buffer) are skipped.
/// Returns the accepted rooms in placement order.
pub fn place_rooms<R: Rng + ?Sized>(
    grid: &mut Grid,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Vec<Room> {
    let mut rooms: Vec<Room> = Vec::new();

    for _ in 0..config.max_rooms {
        let candidate = propose_room(grid, config, rng);
        if rooms.iter().any(|other| candidate.overlaps(other)) {
            continue;
        }

        candidate.cells().for_each(|c| {
            grid.carve(c);
        });
        if let Some(prev) = rooms.last() {
            connect_rooms(grid, prev, &candidate, rng);
        }
        rooms.push(candidate);
    }

    tracing::debug!(
        "[rooms] accepted {} of {} candidates",
        rooms.len(),
        config.max_rooms
    );
    rooms
}

/// Draws a room whose size lies in `[min_room_size, max_room_size]` and whose
/// top-left corner keeps a one-cell margin inside the outer wall ring.
fn propose_room<R: Rng + ?Sized>(grid: &Grid, config: &GeneratorConfig, rng: &mut R) -> Room {
    let sizes = config.min_room_size..=config.max_room_size;
    let w = rng.random_range(sizes.clone());
    let h = rng.random_range(sizes);
    let x = rng.random_range(1..grid.width() - w - 1);
    let y = rng.random_range(1..grid.height() - h - 1);
    Room::new(x, y, w, h)
}
