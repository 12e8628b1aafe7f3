pub mod cell;
pub mod grid;
pub mod layout;
pub mod room;

pub use cell::Cell;
pub use grid::{Grid, ParseGridError};
pub use layout::{DungeonLayout, LayoutError, LayoutOrigin, ObjectKind, Position};
pub use room::Room;

/// Width of every generated floor, in cells.
pub const MAP_WIDTH: u16 = 50;
/// Height of every generated floor, in cells.
pub const MAP_HEIGHT: u16 = 20;

impl Grid {
    /// A full-size grid of solid rock.
    pub fn blank() -> Self {
        Grid::new(MAP_WIDTH, MAP_HEIGHT, Cell::Wall)
    }
}

/// In-bounds cells one step up, down, left or right of `coord`, regardless of their content.
pub fn get_neighbors(coord: (u16, u16), grid: &Grid) -> impl Iterator<Item = (u16, u16)> {
    let neighbors: Vec<(u16, u16)> = if grid.is_in_bounds(coord) {
        let (x, y) = coord;
        vec![
            // x - 1 at 0 wraps to u16::MAX and x + 1 saturates at u16::MAX. A grid is at
            // most u16::MAX cells wide, so u16::MAX is never in bounds and gets filtered out.
            (x, y.saturating_add(1)),
            (x, y.wrapping_sub(1)),
            (x.saturating_add(1), y),
            (x.wrapping_sub(1), y),
        ]
    } else {
        // No neighbors if the coordinate is out of bounds
        vec![]
    };

    neighbors.into_iter().filter(move |&c| grid.is_in_bounds(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_neighbors() {
        let grid = Grid::new(3, 3, Cell::Floor);
        let mut corner = get_neighbors((0, 0), &grid).collect::<Vec<_>>();
        corner.sort();
        assert_eq!(corner, vec![(0, 1), (1, 0)]);
        assert_eq!(get_neighbors((1, 1), &grid).count(), 4);
        assert_eq!(get_neighbors((3, 3), &grid).count(), 0);
    }

    #[test]
    fn test_blank_grid() {
        let grid = Grid::blank();
        assert_eq!(grid.width(), MAP_WIDTH);
        assert_eq!(grid.height(), MAP_HEIGHT);
        assert_eq!(grid.count(Cell::Wall), MAP_WIDTH as usize * MAP_HEIGHT as usize);
    }
}
