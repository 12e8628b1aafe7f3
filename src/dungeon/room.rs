use serde::{Deserialize, Serialize};

/// A rectangular floor region. `(x, y)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Room {
    pub fn new(x: u16, y: u16, w: u16, h: u16) -> Self {
        Room { x, y, w, h }
    }

    pub fn center(&self) -> (u16, u16) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    /// Checks if the two rooms intersect once both are grown by one cell on every side.
    pub fn overlaps(&self, other: &Room) -> bool {
        self.x < other.x + other.w + 1
            && self.x + self.w + 1 > other.x
            && self.y < other.y + other.h + 1
            && self.y + self.h + 1 > other.y
    }

    pub fn contains(&self, coord: (u16, u16)) -> bool {
        let (x, y) = coord;
        x >= self.x && x < self.x + self.w && y >= self.y && y < self.y + self.h
    }

    /// All cells covered by the room, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (u16, u16)> + use<> {
        let Room { x, y, w, h } = *self;
        (y..y + h).flat_map(move |cy| (x..x + w).map(move |cx| (cx, cy)))
    }

    /// Cells strictly inside the room, one cell inset from its borders.
    pub fn interior_cells(&self) -> impl Iterator<Item = (u16, u16)> + use<> {
        let Room { x, y, w, h } = *self;
        (y + 1..(y + h).saturating_sub(1))
            .flat_map(move |cy| (x + 1..(x + w).saturating_sub(1)).map(move |cx| (cx, cy)))
    }
}
