use crate::dungeon::{
    Cell, DungeonLayout, Grid, LayoutOrigin, MAP_HEIGHT, MAP_WIDTH, ObjectKind, Position, Room,
};

pub const FALLBACK_PLAYER_START: Position = Position::new(5, 5);
pub const FALLBACK_DOOR: Position = Position::new(MAP_WIDTH - 15, 5);
pub const FALLBACK_MONSTER: Position = Position::new(MAP_WIDTH - 10, 10);
pub const FALLBACK_CHEST: Position = Position::new(15, MAP_HEIGHT - 5);

/// One open room filling the whole interior, with the objects at fixed cells.
/// Every interior cell is floor, so the layout is connected by construction.
pub fn fallback_layout() -> DungeonLayout {
    let mut grid = Grid::blank();
    let room = Room::new(1, 1, MAP_WIDTH - 2, MAP_HEIGHT - 2);
    room.cells().for_each(|c| grid[c] = Cell::Floor);

    DungeonLayout::build(
        grid,
        [
            (ObjectKind::Door, FALLBACK_DOOR),
            (ObjectKind::Monster, FALLBACK_MONSTER),
            (ObjectKind::Chest, FALLBACK_CHEST),
        ],
        FALLBACK_PLAYER_START,
        vec![room],
        LayoutOrigin::Fallback,
    )
}
