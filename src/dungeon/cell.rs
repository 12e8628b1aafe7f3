use crossterm::style::{Color, StyledContent, Stylize};

use std::fmt;

/// Represents a single cell of the dungeon grid.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Impassable rock. Every grid starts out filled with walls.
    #[default]
    Wall,
    /// Open ground carved by rooms and tunnels.
    Floor,
    /// Decorative terrain. Passable for reachability purposes.
    Water,
    Door,
    Monster,
    Chest,
}

impl Cell {
    /// The fixed symbol alphabet used when a grid is serialized as rows.
    pub const fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Floor => '.',
            Cell::Water => '~',
            Cell::Door => '+',
            Cell::Monster => 'M',
            Cell::Chest => 'C',
        }
    }

    pub const fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            '.' => Some(Cell::Floor),
            '~' => Some(Cell::Water),
            '+' => Some(Cell::Door),
            'M' => Some(Cell::Monster),
            'C' => Some(Cell::Chest),
            _ => None,
        }
    }

    /// Anything that is not a wall can be walked through.
    pub fn is_passable(self) -> bool {
        self != Cell::Wall
    }

    /// The symbol colored for terminal output.
    pub fn styled(self) -> StyledContent<char> {
        let symbol = self.symbol();
        match self {
            Cell::Wall => symbol.with(Color::DarkGrey),
            Cell::Floor => symbol.with(Color::Reset),
            Cell::Water => symbol.with(Color::Blue),
            Cell::Door => symbol.with(Color::Yellow),
            Cell::Monster => symbol.with(Color::Red),
            Cell::Chest => symbol.with(Color::Green),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_alphabet() {
        let alphabet = "#.~+MC";
        for symbol in alphabet.chars() {
            let cell = Cell::from_symbol(symbol).unwrap();
            assert_eq!(cell.symbol(), symbol);
        }
        assert_eq!(Cell::from_symbol('x'), None);
    }

    #[test]
    fn test_only_walls_block() {
        assert!(!Cell::Wall.is_passable());
        assert!(Cell::Water.is_passable());
        assert!(Cell::Monster.is_passable());
    }
}
