use crate::geometry::Point;

/// Identifier tag carried by every tile
///
/// Drives both pathfinding eligibility and decoration rendering. The string
/// forms are the ones stored in map files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileIdentifier {
    Default,
    Grass,
    Terrain,
    TerrainStart,
    TerrainEnd,
}

impl TileIdentifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileIdentifier::Default => "Default",
            TileIdentifier::Grass => "Grass",
            TileIdentifier::Terrain => "Terrain",
            TileIdentifier::TerrainStart => "Terrain-Start",
            TileIdentifier::TerrainEnd => "Terrain-End",
        }
    }

    /// Parse one of the canonical identifier strings
    pub fn parse(s: &str) -> Option<TileIdentifier> {
        match s {
            "Default" => Some(TileIdentifier::Default),
            "Grass" => Some(TileIdentifier::Grass),
            "Terrain" => Some(TileIdentifier::Terrain),
            "Terrain-Start" => Some(TileIdentifier::TerrainStart),
            "Terrain-End" => Some(TileIdentifier::TerrainEnd),
            _ => None,
        }
    }

    /// Whether the pathfinder may step on a tile with this identifier
    pub fn is_walkable(&self) -> bool {
        matches!(
            self,
            TileIdentifier::Terrain | TileIdentifier::TerrainStart | TileIdentifier::TerrainEnd
        )
    }

    /// The marker implied by this identifier, if any
    pub fn decoration(&self) -> Option<Decoration> {
        match self {
            TileIdentifier::TerrainStart => Some(Decoration::Start),
            TileIdentifier::TerrainEnd => Some(Decoration::End),
            _ => None,
        }
    }
}

impl std::fmt::Display for TileIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Secondary marker drawn on top of an endpoint tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Start,
    End,
}

impl Decoration {
    /// Texture table key for this marker
    pub fn texture_key(&self) -> &'static str {
        match self {
            Decoration::Start => "start",
            Decoration::End => "end",
        }
    }
}

/// One row of the tile type table
pub struct TileSpec {
    pub type_id: i32,
    pub texture_key: &'static str,
    pub identifier: TileIdentifier,
}

/// Mapping from brush type id to texture key and identifier
pub static TILE_SPECS: [TileSpec; 3] = [
    TileSpec {
        type_id: 0,
        texture_key: "nonType",
        identifier: TileIdentifier::Default,
    },
    TileSpec {
        type_id: 1,
        texture_key: "type1",
        identifier: TileIdentifier::Grass,
    },
    TileSpec {
        type_id: 2,
        texture_key: "type2",
        identifier: TileIdentifier::Terrain,
    },
];

/// Look up the spec for a type id
///
/// Ids outside the table resolve to the terrain row.
pub fn tile_spec(type_id: i32) -> &'static TileSpec {
    match type_id {
        0 => &TILE_SPECS[0],
        1 => &TILE_SPECS[1],
        _ => &TILE_SPECS[2],
    }
}

/// One authored cell of the map
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Position in grid units
    pub position: Point,
    /// Key into the external texture table
    pub texture_key: &'static str,
    pub type_id: i32,
    pub identifier: TileIdentifier,
    pub decoration: Option<Decoration>,
}

impl Tile {
    /// Build a tile of the given type at a cell coordinate
    pub fn from_type(col: i32, row: i32, type_id: i32) -> Self {
        let spec = tile_spec(type_id);
        Tile {
            position: Point::new(col as f32, row as f32),
            texture_key: spec.texture_key,
            type_id: spec.type_id,
            identifier: spec.identifier,
            decoration: None,
        }
    }

    /// Default (empty) tile at a cell coordinate
    pub fn empty(col: i32, row: i32) -> Self {
        Tile::from_type(col, row, 0)
    }

    /// Rebuild a tile from persisted fields
    ///
    /// The position is given in grid units, already converted from the pixel
    /// coordinates stored in the file. The decoration is re-derived from the
    /// identifier.
    pub fn from_parts(position: Point, type_id: i32, identifier: TileIdentifier) -> Self {
        Tile {
            position,
            texture_key: tile_spec(type_id).texture_key,
            type_id,
            identifier,
            decoration: identifier.decoration(),
        }
    }
}
