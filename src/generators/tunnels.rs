use rand::Rng;

use crate::dungeon::{Grid, Room};

/// Carves a horizontal run of floor along row `y`, clamped to the grid interior.
pub fn carve_horizontal(grid: &mut Grid, x1: u16, x2: u16, y: u16) {
    (x1.min(x2)..=x1.max(x2)).for_each(|x| {
        grid.carve((x, y));
    });
}

/// Carves a vertical run of floor along column `x`, clamped to the grid interior.
pub fn carve_vertical(grid: &mut Grid, y1: u16, y2: u16, x: u16) {
    (y1.min(y2)..=y1.max(y2)).for_each(|y| {
        grid.carve((x, y));
    });
}

/// Connects the centers of two rooms with an L-shaped corridor.
/// The bend direction is picked with a fair coin.
pub fn connect_rooms<R: Rng + ?Sized>(grid: &mut Grid, prev: &Room, next: &Room, rng: &mut R) {
    let (px, py) = prev.center();
    let (nx, ny) = next.center();
    if rng.random_bool(0.5) {
        // Horizontal first, bending at the new room's column
        carve_horizontal(grid, px, nx, py);
        carve_vertical(grid, py, ny, nx);
    } else {
        // Vertical first, bending at the new room's row
        carve_vertical(grid, py, ny, px);
        carve_horizontal(grid, px, nx, ny);
    }
}
