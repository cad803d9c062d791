use crate::endpoints::EndpointManager;
use crate::geometry::{CellPos, Point};
use crate::grid::TileGrid;
use crate::observer::{MapObserver, ObserverRegistry, PATH_COMPLETE_EVENT};
use crate::pathfinding::{GridPathfinder, Pathfinder};
use crate::pathline::PathTracer;
use crate::persist::{self, PersistError};
use std::path::Path;

/// Editing tool applied to a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Brush {
    Erase,
    Grass,
    Terrain,
    Start,
    End,
}

impl Brush {
    /// Map a UI selection index (0..=4) to a brush
    pub fn from_index(index: i32) -> Option<Brush> {
        match index {
            0 => Some(Brush::Erase),
            1 => Some(Brush::Grass),
            2 => Some(Brush::Terrain),
            3 => Some(Brush::Start),
            4 => Some(Brush::End),
            _ => None,
        }
    }

    /// Tile type id painted by this brush, if it is a tile brush
    pub fn type_id(&self) -> Option<i32> {
        match self {
            Brush::Erase => Some(0),
            Brush::Grass => Some(1),
            Brush::Terrain => Some(2),
            Brush::Start | Brush::End => None,
        }
    }
}

/// Aggregate owning the grid, endpoint state, path state and observers
///
/// All operations are synchronous and run on the caller's thread; the host
/// render loop reads the grid and path line between mutations.
pub struct MapManager {
    grid: TileGrid,
    endpoints: EndpointManager,
    tracer: PathTracer,
    pathfinder: Box<dyn Pathfinder>,
    observers: ObserverRegistry,
    last_persist_error: Option<PersistError>,
}

impl MapManager {
    /// Create a manager with the built-in grid pathfinder
    pub fn new(cols: i32, rows: i32) -> Self {
        Self::with_pathfinder(cols, rows, Box::new(GridPathfinder::new()))
    }

    /// Create a manager with a caller-supplied pathfinder
    pub fn with_pathfinder(cols: i32, rows: i32, pathfinder: Box<dyn Pathfinder>) -> Self {
        MapManager {
            grid: TileGrid::new(cols, rows),
            endpoints: EndpointManager::new(),
            tracer: PathTracer::new(),
            pathfinder,
            observers: ObserverRegistry::new(),
            last_persist_error: None,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut TileGrid {
        &mut self.grid
    }

    pub fn last_start(&self) -> Option<CellPos> {
        self.endpoints.last_start()
    }

    pub fn last_end(&self) -> Option<CellPos> {
        self.endpoints.last_end()
    }

    /// Points of the current path line, in path pixel space
    pub fn path_points(&self) -> &[Point] {
        self.tracer.points()
    }

    /// Cells of the current path
    pub fn cell_path(&self) -> &[CellPos] {
        self.tracer.cell_path()
    }

    /// Most recent swallowed persistence failure, if any
    pub fn last_persist_error(&self) -> Option<&PersistError> {
        self.last_persist_error.as_ref()
    }

    /// Register an observer for map events
    pub fn subscribe(&mut self, observer: Box<dyn MapObserver>) {
        self.observers.subscribe(observer);
    }

    /// Resize the grid, keeping the overlapping state
    pub fn set_size(&mut self, cols: i32, rows: i32) {
        self.grid.resize(cols, rows);
    }

    /// Apply a brush at a cell coordinate
    ///
    /// Out-of-bounds coordinates are ignored for every brush, including the
    /// endpoint brushes.
    pub fn apply_brush(&mut self, col: i32, row: i32, brush: Brush) {
        if !self.grid.in_bounds(col, row) {
            return;
        }
        match brush {
            Brush::Erase | Brush::Grass | Brush::Terrain => {
                if let Some(type_id) = brush.type_id() {
                    self.grid.set_tile(col, row, type_id);
                }
            }
            Brush::Start => self.set_start(col, row),
            Brush::End => self.set_end(col, row),
        }
    }

    /// Overwrite tiles with a type; see `TileGrid::fill` for the two modes
    pub fn fill(&mut self, type_id: i32, replace_all: bool) {
        self.grid.fill(type_id, replace_all);
    }

    /// Place the start marker
    pub fn set_start(&mut self, col: i32, row: i32) {
        self.endpoints.place_start(&mut self.grid, col, row);
    }

    /// Place the end marker and recompute the path
    ///
    /// Recomputation runs even when the placement was rejected.
    pub fn set_end(&mut self, col: i32, row: i32) {
        self.endpoints.place_end(&mut self.grid, col, row);
        self.recompute_path();
    }

    /// Run the pathfinder and rebuild the path line
    ///
    /// Observers receive ("end", true) when the new line has at least one
    /// point; an empty result stays silent.
    pub fn recompute_path(&mut self) {
        if self.tracer.recompute(&self.grid, self.pathfinder.as_ref()) {
            self.observers.emit(PATH_COMPLETE_EVENT, true);
        }
    }

    /// Write the map to a file, swallowing failures
    pub fn save_file(&mut self, path: impl AsRef<Path>) {
        match persist::write_map(path, &self.grid, self.tracer.points()) {
            Ok(()) => self.last_persist_error = None,
            Err(e) => {
                eprintln!("Warning: failed to save map: {}", e);
                self.last_persist_error = Some(e);
            }
        }
    }

    /// Load the map from a file, swallowing failures
    ///
    /// On success the endpoint slots are rebuilt from the loaded marker
    /// identifiers. On failure the grid keeps whatever state the reader got
    /// to before the error.
    pub fn load_file(&mut self, path: impl AsRef<Path>) {
        match persist::load_map_into(path, &mut self.grid) {
            Ok(()) => {
                self.endpoints.rescan(&self.grid);
                self.last_persist_error = None;
            }
            Err(e) => {
                eprintln!("Warning: failed to load map: {}", e);
                self.endpoints.rescan(&self.grid);
                self.last_persist_error = Some(e);
            }
        }
    }
}
