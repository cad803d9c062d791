use crate::tile::{tile_spec, Tile};

/// Rectangular tile storage addressed by (column, row)
///
/// Every in-bounds coordinate holds a tile; there are no sparse cells.
#[derive(Debug, Clone)]
pub struct TileGrid {
    cols: i32,
    rows: i32,
    tiles: Vec<Tile>,
}

impl TileGrid {
    /// Create a grid filled with default (empty) tiles
    pub fn new(cols: i32, rows: i32) -> Self {
        let mut tiles = Vec::with_capacity((cols.max(0) * rows.max(0)) as usize);
        for row in 0..rows {
            for col in 0..cols {
                tiles.push(Tile::empty(col, row));
            }
        }
        TileGrid { cols, rows, tiles }
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.cols && row >= 0 && row < self.rows
    }

    fn index(&self, col: i32, row: i32) -> usize {
        (col + row * self.cols) as usize
    }

    pub fn get(&self, col: i32, row: i32) -> Option<&Tile> {
        if self.in_bounds(col, row) {
            self.tiles.get(self.index(col, row))
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut Tile> {
        if self.in_bounds(col, row) {
            let idx = self.index(col, row);
            self.tiles.get_mut(idx)
        } else {
            None
        }
    }

    /// Iterate over all tiles in storage order
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Resize the grid while keeping existing state
    ///
    /// Coordinates present in both the old and new bounds keep a copy of
    /// their prior tile; everything else becomes a default tile.
    pub fn resize(&mut self, new_cols: i32, new_rows: i32) {
        let mut tiles = Vec::with_capacity((new_cols.max(0) * new_rows.max(0)) as usize);
        for row in 0..new_rows {
            for col in 0..new_cols {
                match self.get(col, row) {
                    Some(tile) => tiles.push(tile.clone()),
                    None => tiles.push(Tile::empty(col, row)),
                }
            }
        }
        self.cols = new_cols;
        self.rows = new_rows;
        self.tiles = tiles;
    }

    /// Replace the tile at a coordinate with a fresh tile of the given type
    ///
    /// Out-of-bounds coordinates are ignored. Replacement drops any marker
    /// the old tile carried.
    pub fn set_tile(&mut self, col: i32, row: i32, type_id: i32) {
        if self.in_bounds(col, row) {
            let idx = self.index(col, row);
            self.tiles[idx] = Tile::from_type(col, row, type_id);
        }
    }

    /// Overwrite tiles with the given type
    ///
    /// With `replace_all` every tile is rewritten and its marker cleared.
    /// Otherwise only tiles that are still empty (type id 0) are rewritten,
    /// and markers are left untouched.
    pub fn fill(&mut self, type_id: i32, replace_all: bool) {
        let spec = tile_spec(type_id);
        for tile in &mut self.tiles {
            if replace_all {
                tile.type_id = spec.type_id;
                tile.texture_key = spec.texture_key;
                tile.identifier = spec.identifier;
                tile.decoration = None;
            } else if tile.type_id == 0 {
                tile.type_id = spec.type_id;
                tile.texture_key = spec.texture_key;
                tile.identifier = spec.identifier;
            }
        }
    }
}
