use std::str::FromStr;

use thiserror::Error;

use super::cell::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("map has no rows")]
    Empty,
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown symbol {symbol:?} at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
    #[error("map is {width}x{height}, larger than {}x{}", u16::MAX, u16::MAX)]
    TooLarge { width: usize, height: usize },
}

/// A fixed-size 2D array of cells addressed by `(x, y)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    /// Checks if the cell belongs to the outermost ring of the grid.
    pub fn is_boundary(&self, x: u16, y: u16) -> bool {
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    /// Checks if the cell is inside the grid and not on its outer ring.
    pub fn is_interior(&self, x: u16, y: u16) -> bool {
        self.is_in_bounds((x, y)) && !self.is_boundary(x, y)
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, coord: (u16, u16)) -> Option<Cell> {
        self.is_in_bounds(coord)
            .then(|| self.data[self.ravel_index(coord.0, coord.1)])
    }

    /// Promotes a wall cell to floor. Boundary cells and non-wall cells are left untouched.
    ///
    /// Returns `true` if the cell was carved.
    pub fn carve(&mut self, coord: (u16, u16)) -> bool {
        if !self.is_interior(coord.0, coord.1) || self[coord] != Cell::Wall {
            return false;
        }
        self[coord] = Cell::Floor;
        true
    }

    /// Counts the cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.data.iter().filter(|&&c| c == cell).count()
    }

    /// Serializes the grid as one string per row.
    pub fn rows(&self) -> Vec<String> {
        self.data
            .chunks(self.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<(u16, u16)> for Grid {
    fn index_mut(&mut self, index: (u16, u16)) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s.lines().collect::<Vec<_>>();
        Grid::from_rows(&rows)
    }
}

impl Grid {
    /// Parses rows of symbols back into a grid.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, ParseGridError> {
        let expected = match rows.first() {
            Some(row) => row.as_ref().chars().count(),
            None => return Err(ParseGridError::Empty),
        };
        if expected == 0 {
            return Err(ParseGridError::Empty);
        }
        let too_large = ParseGridError::TooLarge {
            width: expected,
            height: rows.len(),
        };
        let width = u16::try_from(expected).map_err(|_| too_large.clone())?;
        let height = u16::try_from(rows.len()).map_err(|_| too_large)?;

        let mut data = Vec::with_capacity(expected * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let found = row.chars().count();
            if found != expected {
                return Err(ParseGridError::RaggedRow {
                    row: y,
                    found,
                    expected,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let cell =
                    Cell::from_symbol(symbol).ok_or(ParseGridError::UnknownSymbol { symbol, x, y })?;
                data.push(cell);
            }
        }

        Ok(Grid {
            data: data.into_boxed_slice(),
            width,
            height,
        })
    }
}
