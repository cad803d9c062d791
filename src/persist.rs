use crate::geometry::Point;
use crate::grid::TileGrid;
use crate::pathline::CELL_SIZE_PX;
use crate::tile::{Tile, TileIdentifier};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Default map file name
pub const DEFAULT_MAP_FILE: &str = "data.txt";

/// Failure kinds of the map file codec
#[derive(Debug)]
pub enum PersistError {
    /// The map file does not exist
    NotFound,
    /// A token could not be parsed
    ParseError { expected: &'static str, token: String },
    /// The file ended before all fields were read
    Truncated,
    /// Any other I/O failure
    Io(io::Error),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::NotFound => write!(f, "map file not found"),
            PersistError::ParseError { expected, token } => {
                write!(f, "could not parse {} from {:?}", expected, token)
            }
            PersistError::Truncated => write!(f, "map file ended before all fields were read"),
            PersistError::Io(e) => write!(f, "map file I/O error: {}", e),
        }
    }
}

impl std::error::Error for PersistError {}

impl From<io::Error> for PersistError {
    fn from(e: io::Error) -> Self {
        if e.kind() == io::ErrorKind::NotFound {
            PersistError::NotFound
        } else {
            PersistError::Io(e)
        }
    }
}

/// Serialize a grid and path line to the map file text layout
///
/// Dimensions first, then four lines per tile in column-major order
/// (position in pixels, type id, identifier), then one `x, y` line per path
/// point.
pub fn write_map_string(grid: &TileGrid, points: &[Point]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n", grid.cols()));
    out.push_str(&format!("{}\n", grid.rows()));

    for col in 0..grid.cols() {
        for row in 0..grid.rows() {
            if let Some(tile) = grid.get(col, row) {
                out.push_str(&format!("{}\n", tile.position.x * CELL_SIZE_PX));
                out.push_str(&format!("{}\n", tile.position.y * CELL_SIZE_PX));
                out.push_str(&format!("{}\n", tile.type_id));
                out.push_str(&format!("{}\n", tile.identifier));
            }
        }
    }

    for point in points {
        out.push_str(&format!("{}, {}\n", point.x, point.y));
    }

    out
}

/// Write the map file
pub fn write_map(
    path: impl AsRef<Path>,
    grid: &TileGrid,
    points: &[Point],
) -> Result<(), PersistError> {
    let contents = write_map_string(grid, points);
    fs::write(path, contents)?;
    Ok(())
}

/// Load a map file into the grid
///
/// The grid is reset to a default grid of the stored dimensions as soon as
/// they are read, then tiles are filled in as they parse; an error partway
/// through leaves the already-parsed tiles in place. Trailing path point
/// lines are not consumed. Positions are stored in pixels and divided back
/// into grid units here.
pub fn load_map_into(path: impl AsRef<Path>, grid: &mut TileGrid) -> Result<(), PersistError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines();

    let cols = parse_next(&mut lines, "column count")?;
    let rows = parse_next(&mut lines, "row count")?;

    *grid = TileGrid::new(cols, rows);

    for col in 0..cols {
        for row in 0..rows {
            let x: f32 = parse_next(&mut lines, "position x")?;
            let y: f32 = parse_next(&mut lines, "position y")?;
            let type_id: i32 = parse_next(&mut lines, "type id")?;
            let identifier = parse_identifier(next_line(&mut lines)?)?;

            let position = Point::new(x / CELL_SIZE_PX, y / CELL_SIZE_PX);
            if let Some(slot) = grid.get_mut(col, row) {
                *slot = Tile::from_parts(position, type_id, identifier);
            }
        }
    }

    Ok(())
}

fn next_line<'a>(lines: &mut std::str::Lines<'a>) -> Result<&'a str, PersistError> {
    lines.next().ok_or(PersistError::Truncated)
}

fn parse_next<T: std::str::FromStr>(
    lines: &mut std::str::Lines<'_>,
    expected: &'static str,
) -> Result<T, PersistError> {
    let line = next_line(lines)?;
    line.trim().parse().map_err(|_| PersistError::ParseError {
        expected,
        token: line.to_string(),
    })
}

/// Parse a persisted identifier string
///
/// The five canonical strings parse exactly. Unrecognized dashed identifiers
/// from older or hand-edited files load as a start marker when they contain
/// "start" in any casing, and as an end marker otherwise.
fn parse_identifier(line: &str) -> Result<TileIdentifier, PersistError> {
    let trimmed = line.trim();
    if let Some(identifier) = TileIdentifier::parse(trimmed) {
        return Ok(identifier);
    }
    if trimmed.contains('-') {
        if trimmed.to_lowercase().contains("start") {
            return Ok(TileIdentifier::TerrainStart);
        }
        return Ok(TileIdentifier::TerrainEnd);
    }
    Err(PersistError::ParseError {
        expected: "tile identifier",
        token: line.to_string(),
    })
}
