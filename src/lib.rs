//! Seeded single-floor dungeon generation: rooms joined by corridors, decorated by style,
//! with a door, monster and chest that are always reachable from the player start.

pub mod dungeon;
pub mod generators;
pub mod solvers;
