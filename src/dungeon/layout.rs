use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Cell, Grid, MAP_HEIGHT, MAP_WIDTH, ParseGridError, Room};
use crate::solvers::is_reachable;

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Position {
    pub x: u16,
    pub y: u16,
}

impl Position {
    pub const fn new(x: u16, y: u16) -> Self {
        Position { x, y }
    }

    pub const fn coord(self) -> (u16, u16) {
        (self.x, self.y)
    }
}

impl From<(u16, u16)> for Position {
    fn from((x, y): (u16, u16)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The interactive objects placed on every floor. Serialized by their map symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ObjectKind {
    #[serde(rename = "+")]
    Door,
    #[serde(rename = "M")]
    Monster,
    #[serde(rename = "C")]
    Chest,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [ObjectKind::Door, ObjectKind::Monster, ObjectKind::Chest];

    pub const fn cell(self) -> Cell {
        match self {
            ObjectKind::Door => Cell::Door,
            ObjectKind::Monster => Cell::Monster,
            ObjectKind::Chest => Cell::Chest,
        }
    }

    pub const fn symbol(self) -> char {
        self.cell().symbol()
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectKind::Door => write!(f, "door"),
            ObjectKind::Monster => write!(f, "monster"),
            ObjectKind::Chest => write!(f, "chest"),
        }
    }
}

/// How a layout came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum LayoutOrigin {
    /// Produced by the randomized pipeline on the given (1-based) attempt.
    Generated { attempt: u32 },
    /// The static layout used once every attempt failed.
    Fallback,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("map has {found} rows, expected {}", MAP_HEIGHT)]
    WrongHeight { found: usize },
    #[error("row {row} has {found} cells, expected {}", MAP_WIDTH)]
    WrongWidth { row: usize, found: usize },
    #[error(transparent)]
    Parse(#[from] ParseGridError),
    #[error("border cell at ({x}, {y}) is not a wall")]
    OpenBorder { x: u16, y: u16 },
    #[error("no position recorded for the {0}")]
    MissingObject(ObjectKind),
    #[error("the {kind} is not drawn at {position}")]
    MisplacedObject { kind: ObjectKind, position: Position },
    #[error("the {kind} symbol appears {found} times on the map")]
    ObjectCount { kind: ObjectKind, found: usize },
    #[error("player start {0} is not on open ground")]
    BlockedStart(Position),
    #[error("objects are not all reachable from the player start {0}")]
    Unreachable(Position),
}

/// A finished floor plan. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DungeonLayout {
    map: Vec<String>,
    object_positions: BTreeMap<ObjectKind, Position>,
    player_start: Position,
    rooms: Vec<Room>,
    origin: LayoutOrigin,
}

impl DungeonLayout {
    /// Stamps the objects onto `grid` and freezes the result.
    pub(crate) fn build(
        mut grid: Grid,
        objects: [(ObjectKind, Position); 3],
        player_start: Position,
        rooms: Vec<Room>,
        origin: LayoutOrigin,
    ) -> Self {
        for (kind, position) in objects {
            grid[position.coord()] = kind.cell();
        }
        DungeonLayout {
            map: grid.rows(),
            object_positions: objects.into_iter().collect(),
            player_start,
            rooms,
            origin,
        }
    }

    /// The map as `MAP_HEIGHT` rows of `MAP_WIDTH` symbols.
    pub fn map(&self) -> &[String] {
        &self.map
    }

    pub fn object_positions(&self) -> &BTreeMap<ObjectKind, Position> {
        &self.object_positions
    }

    pub fn object_position(&self, kind: ObjectKind) -> Option<Position> {
        self.object_positions.get(&kind).copied()
    }

    pub fn player_start(&self) -> Position {
        self.player_start
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn origin(&self) -> LayoutOrigin {
        self.origin
    }

    pub fn is_fallback(&self) -> bool {
        self.origin == LayoutOrigin::Fallback
    }

    pub fn symbol_at(&self, position: Position) -> Option<char> {
        self.map
            .get(position.y as usize)?
            .chars()
            .nth(position.x as usize)
    }

    pub fn object_at(&self, position: Position) -> Option<ObjectKind> {
        self.object_positions
            .iter()
            .find(|&(_, &p)| p == position)
            .map(|(&kind, _)| kind)
    }

    /// Parses the map rows back into a grid.
    pub fn grid(&self) -> Result<Grid, ParseGridError> {
        Grid::from_rows(&self.map)
    }

    /// Checks every structural guarantee a layout must satisfy, independently of how it was built.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.map.len() != MAP_HEIGHT as usize {
            return Err(LayoutError::WrongHeight {
                found: self.map.len(),
            });
        }
        if let Some((row, found)) = self
            .map
            .iter()
            .map(|r| r.chars().count())
            .enumerate()
            .find(|&(_, len)| len != MAP_WIDTH as usize)
        {
            return Err(LayoutError::WrongWidth { row, found });
        }

        let grid = self.grid()?;

        for y in 0..grid.height() {
            for x in 0..grid.width() {
                if grid.is_boundary(x, y) && grid[(x, y)] != Cell::Wall {
                    return Err(LayoutError::OpenBorder { x, y });
                }
            }
        }

        let mut targets = Vec::with_capacity(ObjectKind::ALL.len());
        for kind in ObjectKind::ALL {
            let position = self
                .object_position(kind)
                .ok_or(LayoutError::MissingObject(kind))?;
            if grid.get(position.coord()) != Some(kind.cell()) {
                return Err(LayoutError::MisplacedObject { kind, position });
            }
            let found = grid.count(kind.cell());
            if found != 1 {
                return Err(LayoutError::ObjectCount { kind, found });
            }
            targets.push(position);
        }

        // Objects occupy their own cells, so a start on floor or water is distinct from all of them.
        let start = self.player_start;
        if !matches!(grid.get(start.coord()), Some(Cell::Floor | Cell::Water)) {
            return Err(LayoutError::BlockedStart(start));
        }

        if !is_reachable(&grid, start, &targets) {
            return Err(LayoutError::Unreachable(start));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_layout() -> DungeonLayout {
        let mut grid = Grid::blank();
        let room = Room::new(1, 1, MAP_WIDTH - 2, MAP_HEIGHT - 2);
        room.cells().for_each(|c| grid[c] = Cell::Floor);
        DungeonLayout::build(
            grid,
            [
                (ObjectKind::Door, Position::new(3, 3)),
                (ObjectKind::Monster, Position::new(4, 4)),
                (ObjectKind::Chest, Position::new(5, 5)),
            ],
            Position::new(2, 2),
            vec![room],
            LayoutOrigin::Generated { attempt: 1 },
        )
    }

    #[test]
    fn test_build_stamps_objects() {
        let layout = open_layout();
        assert_eq!(layout.symbol_at(Position::new(3, 3)), Some('+'));
        assert_eq!(layout.symbol_at(Position::new(4, 4)), Some('M'));
        assert_eq!(layout.symbol_at(Position::new(5, 5)), Some('C'));
        assert_eq!(layout.symbol_at(Position::new(2, 2)), Some('.'));
        assert_eq!(layout.object_at(Position::new(4, 4)), Some(ObjectKind::Monster));
        assert_eq!(layout.object_at(Position::new(2, 2)), None);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_open_border() {
        let mut layout = open_layout();
        layout.map[0].replace_range(7..8, ".");
        assert_eq!(layout.validate(), Err(LayoutError::OpenBorder { x: 7, y: 0 }));
    }

    #[test]
    fn test_validate_rejects_sealed_object() {
        let mut layout = open_layout();
        // Box the chest in with walls
        for (x, y) in [(5usize, 4usize), (5, 6), (4, 5), (6, 5)] {
            layout.map[y].replace_range(x..x + 1, "#");
        }
        assert_eq!(
            layout.validate(),
            Err(LayoutError::Unreachable(Position::new(2, 2)))
        );
    }

    #[test]
    fn test_validate_rejects_shape() {
        let mut layout = open_layout();
        layout.map.pop();
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::WrongHeight { found }) if found == MAP_HEIGHT as usize - 1
        ));

        let mut layout = open_layout();
        layout.map[3].push('#');
        assert!(matches!(
            layout.validate(),
            Err(LayoutError::WrongWidth { row: 3, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_start_on_object() {
        let mut layout = open_layout();
        layout.player_start = Position::new(3, 3);
        assert_eq!(
            layout.validate(),
            Err(LayoutError::BlockedStart(Position::new(3, 3)))
        );
    }

    #[test]
    fn test_json_uses_symbol_keys() {
        let layout = open_layout();
        let json = serde_json::to_value(&layout).unwrap();
        assert_eq!(json["playerStart"]["x"], 2);
        assert_eq!(json["objectPositions"]["+"]["y"], 3);
        assert_eq!(json["objectPositions"]["C"]["x"], 5);
        assert_eq!(json["map"].as_array().unwrap().len(), MAP_HEIGHT as usize);
        assert_eq!(json["origin"]["kind"], "generated");
    }

    #[test]
    fn test_json_load_matches_saved_layout() {
        use crate::generators::{Style, fallback_layout, generate_dungeon};

        let mut layouts = Style::ALL
            .iter()
            .map(|&style| generate_dungeon(style, Some(42)))
            .collect::<Vec<_>>();
        layouts.push(fallback_layout());

        for layout in layouts {
            let json = serde_json::to_string(&layout).unwrap();
            let loaded: DungeonLayout = serde_json::from_str(&json).unwrap();
            assert_eq!(loaded, layout);
            assert_eq!(loaded.origin(), layout.origin());
            assert_eq!(loaded.validate(), Ok(()));
        }
    }

    #[test]
    fn test_json_load_rejects_moved_object() {
        let mut json = serde_json::to_value(open_layout()).unwrap();
        json["objectPositions"]["+"]["x"] = 4.into();
        let loaded: DungeonLayout = serde_json::from_value(json).unwrap();
        assert_eq!(
            loaded.validate(),
            Err(LayoutError::MisplacedObject {
                kind: ObjectKind::Door,
                position: Position::new(4, 3)
            })
        );
    }

    #[test]
    fn test_json_load_rejects_unknown_object_key() {
        let mut json = serde_json::to_value(open_layout()).unwrap();
        let objects = json["objectPositions"].as_object_mut().unwrap();
        let chest = objects.remove("C").unwrap();
        objects.insert("X".to_string(), chest);
        assert!(serde_json::from_value::<DungeonLayout>(json).is_err());
    }

    #[test]
    fn test_json_load_rejects_missing_object() {
        let mut json = serde_json::to_value(open_layout()).unwrap();
        json["objectPositions"].as_object_mut().unwrap().remove("M");
        let loaded: DungeonLayout = serde_json::from_value(json).unwrap();
        assert_eq!(
            loaded.validate(),
            Err(LayoutError::MissingObject(ObjectKind::Monster))
        );
    }
}
