#![allow(dead_code)]

use mapedit::observer::MapObserver;
use mapedit::{CellPos, Pathfinder, TileGrid};
use std::cell::RefCell;
use std::rc::Rc;

/// Build a grid from an ASCII layout
///
/// Characters per cell: `.` = empty (type 0), `g` = grass (type 1),
/// `t` = terrain (type 2). Lines are rows; the first line sets the width.
pub fn build_grid(layout: &str) -> TileGrid {
    let lines: Vec<&str> = layout
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    let rows = lines.len() as i32;
    let cols = lines.first().map(|l| l.chars().count()).unwrap_or(0) as i32;

    let mut grid = TileGrid::new(cols, rows);
    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let type_id = match ch {
                'g' => 1,
                't' => 2,
                _ => 0,
            };
            grid.set_tile(col as i32, row as i32, type_id);
        }
    }
    grid
}

/// Pathfinder that ignores the grid and returns a fixed cell path
pub struct StubPathfinder {
    pub path: Vec<CellPos>,
}

impl StubPathfinder {
    pub fn new(path: Vec<(i32, i32)>) -> Self {
        StubPathfinder {
            path: path
                .into_iter()
                .map(|(col, row)| CellPos::new(col, row))
                .collect(),
        }
    }
}

impl Pathfinder for StubPathfinder {
    fn find_path(&self, _grid: &TileGrid) -> Vec<CellPos> {
        self.path.clone()
    }
}

/// Shared record of (event, success) pairs seen by an observer
pub type EventRecord = Rc<RefCell<Vec<(String, bool)>>>;

/// Observer that appends every notification to a shared record
pub fn recording_observer() -> (EventRecord, Box<dyn MapObserver>) {
    let record: EventRecord = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&record);
    let observer: Box<dyn MapObserver> = Box::new(move |event: &str, success: bool| {
        sink.borrow_mut().push((event.to_string(), success));
    });
    (record, observer)
}

/// Count tiles in the grid carrying the given identifier
pub fn count_identifier(grid: &TileGrid, identifier: mapedit::TileIdentifier) -> usize {
    grid.iter().filter(|t| t.identifier == identifier).count()
}
