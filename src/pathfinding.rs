use crate::geometry::CellPos;
use crate::grid::TileGrid;
use crate::tile::TileIdentifier;
use std::collections::{HashMap, VecDeque};

/// Produces a cell path connecting the start and end markers of a grid
///
/// An empty result means no path exists or the markers are not both placed.
pub trait Pathfinder {
    fn find_path(&self, grid: &TileGrid) -> Vec<CellPos>;
}

/// Breadth-first pathfinder over walkable tiles
///
/// Walkable tiles are the terrain identifiers (including the two markers);
/// movement is 4-directional. The returned path is ordered start to end and
/// includes both endpoints.
#[derive(Debug, Default)]
pub struct GridPathfinder;

impl GridPathfinder {
    pub fn new() -> Self {
        GridPathfinder
    }

    /// Locate the cell carrying the given identifier, if any
    fn find_marker(grid: &TileGrid, marker: TileIdentifier) -> Option<CellPos> {
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if let Some(tile) = grid.get(col, row) {
                    if tile.identifier == marker {
                        return Some(CellPos::new(col, row));
                    }
                }
            }
        }
        None
    }

    fn is_walkable(grid: &TileGrid, col: i32, row: i32) -> bool {
        grid.get(col, row)
            .map(|tile| tile.identifier.is_walkable())
            .unwrap_or(false)
    }
}

impl Pathfinder for GridPathfinder {
    fn find_path(&self, grid: &TileGrid) -> Vec<CellPos> {
        let start = match Self::find_marker(grid, TileIdentifier::TerrainStart) {
            Some(pos) => pos,
            None => return Vec::new(),
        };
        let end = match Self::find_marker(grid, TileIdentifier::TerrainEnd) {
            Some(pos) => pos,
            None => return Vec::new(),
        };

        let mut came_from: HashMap<CellPos, CellPos> = HashMap::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        came_from.insert(start, start);

        while let Some(current) = queue.pop_front() {
            if current == end {
                // Walk the chain back to the start
                let mut path = vec![current];
                let mut pos = current;
                while pos != start {
                    pos = came_from[&pos];
                    path.push(pos);
                }
                path.reverse();
                return path;
            }

            let neighbors = [
                CellPos::new(current.col + 1, current.row),
                CellPos::new(current.col - 1, current.row),
                CellPos::new(current.col, current.row + 1),
                CellPos::new(current.col, current.row - 1),
            ];
            for next in neighbors {
                if !came_from.contains_key(&next) && Self::is_walkable(grid, next.col, next.row) {
                    came_from.insert(next, current);
                    queue.push_back(next);
                }
            }
        }

        Vec::new()
    }
}
