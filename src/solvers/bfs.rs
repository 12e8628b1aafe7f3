use std::collections::{HashSet, VecDeque};

use crate::dungeon::{Grid, Position, get_neighbors};

/// Breadth-first search from `start` over non-wall cells.
///
/// Returns `true` iff every position in `targets` is visited. A target equal to `start`
/// is dropped before searching rather than counted as trivially reached.
pub fn is_reachable(grid: &Grid, start: Position, targets: &[Position]) -> bool {
    let mut remaining: HashSet<(u16, u16)> = targets.iter().map(|p| p.coord()).collect();
    remaining.remove(&start.coord());

    let mut visited = HashSet::new();
    visited.insert(start.coord());
    let mut queue = VecDeque::from([start.coord()]);

    while let Some(current) = queue.pop_front() {
        if remaining.is_empty() {
            return true;
        }

        let next_cells = get_neighbors(current, grid)
            .filter(|&c| grid[c].is_passable() && !visited.contains(&c))
            .collect::<Vec<_>>();

        for c in next_cells {
            visited.insert(c);
            remaining.remove(&c);
            queue.push_back(c);
        }
    }

    remaining.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::Cell;

    fn corridor() -> Grid {
        "#######\n#..~..#\n#######".parse().unwrap()
    }

    #[test]
    fn test_reaches_through_water() {
        let grid = corridor();
        assert!(is_reachable(
            &grid,
            Position::new(1, 1),
            &[Position::new(5, 1)]
        ));
    }

    #[test]
    fn test_wall_blocks() {
        let mut grid = corridor();
        grid[(3, 1)] = Cell::Wall;
        assert!(!is_reachable(
            &grid,
            Position::new(1, 1),
            &[Position::new(2, 1), Position::new(5, 1)]
        ));
        assert!(is_reachable(
            &grid,
            Position::new(1, 1),
            &[Position::new(2, 1)]
        ));
    }

    #[test]
    fn test_no_diagonal_moves() {
        let grid: Grid = "####\n#.##\n##.#\n####".parse().unwrap();
        assert!(!is_reachable(
            &grid,
            Position::new(1, 1),
            &[Position::new(2, 2)]
        ));
    }

    #[test]
    fn test_start_target_is_ignored() {
        let grid = corridor();
        assert!(is_reachable(&grid, Position::new(1, 1), &[]));
        assert!(is_reachable(
            &grid,
            Position::new(1, 1),
            &[Position::new(1, 1)]
        ));
    }

    #[test]
    fn test_walled_target_is_unreachable() {
        let grid = corridor();
        assert!(!is_reachable(
            &grid,
            Position::new(1, 1),
            &[Position::new(0, 0)]
        ));
    }
}
