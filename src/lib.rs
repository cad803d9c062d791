pub mod action_log;
pub mod config;
pub mod endpoints;
pub mod geometry;
pub mod grid;
pub mod manager;
pub mod observer;
pub mod pathfinding;
pub mod pathline;
pub mod persist;
pub mod tile;

pub use geometry::{CellPos, Point};
pub use grid::TileGrid;
pub use manager::{Brush, MapManager};
pub use observer::{MapObserver, PATH_COMPLETE_EVENT};
pub use pathfinding::{GridPathfinder, Pathfinder};
pub use pathline::{build_path_line, PathTracer, CELL_SIZE_PX, STEP_PX};
pub use tile::{Decoration, Tile, TileIdentifier};
