mod bfs;

pub use bfs::is_reachable;
