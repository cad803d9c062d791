use mapedit::tile::{tile_spec, Tile, TILE_SPECS};
use mapedit::{Decoration, Point, TileIdentifier};

#[test]
fn type_table_covers_the_three_brush_types() {
    assert_eq!(TILE_SPECS.len(), 3);
    for (expected_id, spec) in TILE_SPECS.iter().enumerate() {
        assert_eq!(spec.type_id, expected_id as i32);
    }

    assert_eq!(tile_spec(0).texture_key, "nonType");
    assert_eq!(tile_spec(0).identifier, TileIdentifier::Default);
    assert_eq!(tile_spec(1).texture_key, "type1");
    assert_eq!(tile_spec(1).identifier, TileIdentifier::Grass);
    assert_eq!(tile_spec(2).texture_key, "type2");
    assert_eq!(tile_spec(2).identifier, TileIdentifier::Terrain);

    // Anything outside the table resolves to the terrain row
    assert_eq!(tile_spec(-1).identifier, TileIdentifier::Terrain);
    assert_eq!(tile_spec(99).identifier, TileIdentifier::Terrain);
}

#[test]
fn identifier_strings_round_trip() {
    let all = [
        TileIdentifier::Default,
        TileIdentifier::Grass,
        TileIdentifier::Terrain,
        TileIdentifier::TerrainStart,
        TileIdentifier::TerrainEnd,
    ];
    for identifier in all {
        assert_eq!(TileIdentifier::parse(identifier.as_str()), Some(identifier));
    }
    assert_eq!(TileIdentifier::parse("terrain"), None);
    assert_eq!(TileIdentifier::parse(""), None);
}

#[test]
fn walkability_follows_the_terrain_identifiers() {
    assert!(!TileIdentifier::Default.is_walkable());
    assert!(!TileIdentifier::Grass.is_walkable());
    assert!(TileIdentifier::Terrain.is_walkable());
    assert!(TileIdentifier::TerrainStart.is_walkable());
    assert!(TileIdentifier::TerrainEnd.is_walkable());
}

#[test]
fn decorations_are_implied_by_marker_identifiers() {
    assert_eq!(TileIdentifier::TerrainStart.decoration(), Some(Decoration::Start));
    assert_eq!(TileIdentifier::TerrainEnd.decoration(), Some(Decoration::End));
    assert_eq!(TileIdentifier::Terrain.decoration(), None);

    assert_eq!(Decoration::Start.texture_key(), "start");
    assert_eq!(Decoration::End.texture_key(), "end");
}

#[test]
fn rebuilt_tiles_stay_consistent() {
    let tile = Tile::from_parts(Point::new(2.0, 3.0), 2, TileIdentifier::TerrainStart);

    assert_eq!(tile.texture_key, "type2");
    assert_eq!(tile.decoration, Some(Decoration::Start));

    let plain = Tile::from_parts(Point::new(0.0, 0.0), 1, TileIdentifier::Grass);
    assert!(plain.decoration.is_none());
}
