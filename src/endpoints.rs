use crate::geometry::CellPos;
use crate::grid::TileGrid;
use crate::tile::{Decoration, TileIdentifier};

/// Tracks the single start and single end marker on the grid
///
/// A marker may only be placed on a plain `Terrain` tile. Placing a marker
/// first clears the previous one, then checks eligibility of the target, so
/// a rejected placement still removes the old marker and the slot follows
/// the requested coordinate either way.
#[derive(Debug, Default)]
pub struct EndpointManager {
    last_start: Option<CellPos>,
    last_end: Option<CellPos>,
}

impl EndpointManager {
    pub fn new() -> Self {
        EndpointManager {
            last_start: None,
            last_end: None,
        }
    }

    pub fn last_start(&self) -> Option<CellPos> {
        self.last_start
    }

    pub fn last_end(&self) -> Option<CellPos> {
        self.last_end
    }

    /// Place the start marker at (col, row)
    ///
    /// Returns true if the marker landed on the target tile.
    pub fn place_start(&mut self, grid: &mut TileGrid, col: i32, row: i32) -> bool {
        Self::place(
            grid,
            &mut self.last_start,
            col,
            row,
            TileIdentifier::TerrainStart,
            Decoration::Start,
        )
    }

    /// Place the end marker at (col, row)
    ///
    /// Returns true if the marker landed on the target tile. The caller is
    /// expected to recompute the path afterwards regardless of the outcome.
    pub fn place_end(&mut self, grid: &mut TileGrid, col: i32, row: i32) -> bool {
        Self::place(
            grid,
            &mut self.last_end,
            col,
            row,
            TileIdentifier::TerrainEnd,
            Decoration::End,
        )
    }

    fn place(
        grid: &mut TileGrid,
        slot: &mut Option<CellPos>,
        col: i32,
        row: i32,
        marker: TileIdentifier,
        decoration: Decoration,
    ) -> bool {
        // Clear the previous marker and move the slot before looking at the
        // target; a rejected placement still erases the old marker.
        if let Some(prev) = slot.take() {
            if let Some(tile) = grid.get_mut(prev.col, prev.row) {
                tile.decoration = None;
                tile.identifier = TileIdentifier::Terrain;
            }
            *slot = Some(CellPos::new(col, row));
        }

        let eligible = grid
            .get(col, row)
            .map(|tile| tile.identifier == TileIdentifier::Terrain)
            .unwrap_or(false);

        if eligible {
            if let Some(tile) = grid.get_mut(col, row) {
                tile.decoration = Some(decoration);
                tile.identifier = marker;
            }
            *slot = Some(CellPos::new(col, row));
            true
        } else {
            false
        }
    }

    /// Rebuild both slots by scanning the grid for marker identifiers
    ///
    /// Used after loading a map file, which stores markers only as tile
    /// identifiers.
    pub fn rescan(&mut self, grid: &TileGrid) {
        self.last_start = None;
        self.last_end = None;
        for row in 0..grid.rows() {
            for col in 0..grid.cols() {
                if let Some(tile) = grid.get(col, row) {
                    match tile.identifier {
                        TileIdentifier::TerrainStart => {
                            self.last_start = Some(CellPos::new(col, row));
                        }
                        TileIdentifier::TerrainEnd => {
                            self.last_end = Some(CellPos::new(col, row));
                        }
                        _ => {}
                    }
                }
            }
        }
    }
}
