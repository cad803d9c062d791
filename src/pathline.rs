use crate::geometry::{CellPos, Point};
use crate::grid::TileGrid;
use crate::pathfinding::Pathfinder;

/// Pixel size of one cell in path space
pub const CELL_SIZE_PX: f32 = 100.0;
/// Distance between consecutive path line points
pub const STEP_PX: f32 = 4.0;

/// Convert a discrete cell path into a constant-step polyline
///
/// For each consecutive cell pair the direction is computed once, then points
/// are emitted from the first cell's pixel center in steps of `step_px` until
/// the remaining distance to the second center drops below one pixel. That
/// last point is not emitted, so each segment ends just short of its target
/// center and the next segment restarts exactly on it; the final cell center
/// is never appended at all.
pub fn build_path_line(cell_path: &[CellPos], cell_size_px: f32, step_px: f32) -> Vec<Point> {
    let mut points = Vec::new();

    for pair in cell_path.windows(2) {
        let from = pair[0].center_px(cell_size_px);
        let to = pair[1].center_px(cell_size_px);

        let angle = (to.y - from.y).atan2(to.x - from.x);
        let step_x = step_px * angle.cos();
        let step_y = step_px * angle.sin();

        let mut pos = from;
        let mut prev_distance = f32::INFINITY;
        loop {
            let distance = pos.distance(&to);
            // The second clause stops a segment whose step pattern never
            // lands inside the cutoff: once the distance stops shrinking the
            // target has been passed.
            if distance < 1.0 || distance >= prev_distance {
                break;
            }
            points.push(pos);
            prev_distance = distance;
            pos.x += step_x;
            pos.y += step_y;
        }
    }

    points
}

/// Holds the most recent pathfinder result and its polyline
///
/// Both buffers are discarded and rebuilt in full on every recomputation.
#[derive(Debug, Default)]
pub struct PathTracer {
    cell_path: Vec<CellPos>,
    points: Vec<Point>,
}

impl PathTracer {
    pub fn new() -> Self {
        PathTracer {
            cell_path: Vec::new(),
            points: Vec::new(),
        }
    }

    pub fn cell_path(&self) -> &[CellPos] {
        &self.cell_path
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Run the pathfinder against the grid and rebuild the polyline
    ///
    /// Returns true when the new polyline has at least one point.
    pub fn recompute(&mut self, grid: &TileGrid, pathfinder: &dyn Pathfinder) -> bool {
        self.cell_path = pathfinder.find_path(grid);
        self.points = build_path_line(&self.cell_path, CELL_SIZE_PX, STEP_PX);
        !self.points.is_empty()
    }
}
