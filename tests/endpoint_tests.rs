mod common;

use common::{build_grid, count_identifier};
use mapedit::endpoints::EndpointManager;
use mapedit::{CellPos, Decoration, TileIdentifier};

#[test]
fn start_lands_on_plain_terrain() {
    let mut grid = build_grid("ttt");
    let mut endpoints = EndpointManager::new();

    let placed = endpoints.place_start(&mut grid, 1, 0);

    assert!(placed);
    let tile = grid.get(1, 0).unwrap();
    assert_eq!(tile.identifier, TileIdentifier::TerrainStart);
    assert_eq!(tile.decoration, Some(Decoration::Start));
    assert_eq!(endpoints.last_start(), Some(CellPos::new(1, 0)));
}

#[test]
fn start_is_rejected_on_grass_and_default() {
    let mut grid = build_grid("g.t");
    let mut endpoints = EndpointManager::new();

    assert!(!endpoints.place_start(&mut grid, 0, 0));
    assert!(!endpoints.place_start(&mut grid, 1, 0));

    assert_eq!(grid.get(0, 0).unwrap().identifier, TileIdentifier::Grass);
    assert_eq!(grid.get(1, 0).unwrap().identifier, TileIdentifier::Default);
    // No previous marker existed, so the slot stays empty
    assert_eq!(endpoints.last_start(), None);
}

#[test]
fn moving_the_start_clears_the_old_marker() {
    let mut grid = build_grid("ttt");
    let mut endpoints = EndpointManager::new();

    endpoints.place_start(&mut grid, 0, 0);
    endpoints.place_start(&mut grid, 2, 0);

    let old = grid.get(0, 0).unwrap();
    assert_eq!(old.identifier, TileIdentifier::Terrain);
    assert!(old.decoration.is_none());

    let new = grid.get(2, 0).unwrap();
    assert_eq!(new.identifier, TileIdentifier::TerrainStart);
    assert_eq!(endpoints.last_start(), Some(CellPos::new(2, 0)));
    assert_eq!(count_identifier(&grid, TileIdentifier::TerrainStart), 1);
}

#[test]
fn rejected_move_still_clears_the_previous_marker() {
    let mut grid = build_grid("tgt");
    let mut endpoints = EndpointManager::new();

    endpoints.place_start(&mut grid, 0, 0);
    let placed = endpoints.place_start(&mut grid, 1, 0);

    assert!(!placed);
    // The grass target is untouched
    let target = grid.get(1, 0).unwrap();
    assert_eq!(target.identifier, TileIdentifier::Grass);
    assert!(target.decoration.is_none());
    // But the old marker is gone and the slot follows the rejected coordinate
    let old = grid.get(0, 0).unwrap();
    assert_eq!(old.identifier, TileIdentifier::Terrain);
    assert!(old.decoration.is_none());
    assert_eq!(endpoints.last_start(), Some(CellPos::new(1, 0)));
    assert_eq!(count_identifier(&grid, TileIdentifier::TerrainStart), 0);
}

#[test]
fn endpoints_cannot_overwrite_each_other() {
    let mut grid = build_grid("ttt");
    let mut endpoints = EndpointManager::new();

    endpoints.place_end(&mut grid, 2, 0);
    let placed = endpoints.place_start(&mut grid, 2, 0);

    assert!(!placed);
    assert_eq!(grid.get(2, 0).unwrap().identifier, TileIdentifier::TerrainEnd);
    assert_eq!(count_identifier(&grid, TileIdentifier::TerrainEnd), 1);
}

#[test]
fn markers_stay_exclusive_over_many_placements() {
    let mut grid = build_grid(
        "ttt
         ttt",
    );
    let mut endpoints = EndpointManager::new();

    for (col, row) in [(0, 0), (1, 0), (2, 1), (0, 1), (2, 0)] {
        endpoints.place_start(&mut grid, col, row);
        endpoints.place_end(&mut grid, 2 - col, 1 - row);

        assert!(count_identifier(&grid, TileIdentifier::TerrainStart) <= 1);
        assert!(count_identifier(&grid, TileIdentifier::TerrainEnd) <= 1);
    }
}

#[test]
fn clearing_survives_a_shrunken_grid() {
    let mut grid = build_grid("ttt");
    let mut endpoints = EndpointManager::new();

    endpoints.place_start(&mut grid, 2, 0);
    grid.resize(1, 1);

    // The previous slot is out of bounds now; clearing skips it silently
    let placed = endpoints.place_start(&mut grid, 0, 0);
    assert!(placed);
    assert_eq!(grid.get(0, 0).unwrap().identifier, TileIdentifier::TerrainStart);
}

#[test]
fn replacing_start_on_the_same_cell_keeps_it() {
    let mut grid = build_grid("tt");
    let mut endpoints = EndpointManager::new();

    endpoints.place_start(&mut grid, 0, 0);
    let placed = endpoints.place_start(&mut grid, 0, 0);

    // The clear pass resets the tile to plain terrain, which makes it
    // eligible again for the same placement
    assert!(placed);
    assert_eq!(grid.get(0, 0).unwrap().identifier, TileIdentifier::TerrainStart);
    assert_eq!(endpoints.last_start(), Some(CellPos::new(0, 0)));
}

#[test]
fn rescan_rebuilds_slots_from_identifiers() {
    let mut grid = build_grid("ttt");
    grid.get_mut(0, 0).unwrap().identifier = TileIdentifier::TerrainStart;
    grid.get_mut(2, 0).unwrap().identifier = TileIdentifier::TerrainEnd;

    let mut endpoints = EndpointManager::new();
    endpoints.rescan(&grid);

    assert_eq!(endpoints.last_start(), Some(CellPos::new(0, 0)));
    assert_eq!(endpoints.last_end(), Some(CellPos::new(2, 0)));
}
