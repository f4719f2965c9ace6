//! Grid tests - board storage through the facade crate

use gem_crush::core::Grid;
use gem_crush::types::{Position, TileKind};

#[test]
fn test_grid_new_is_all_empty() {
    let grid = Grid::new(8, 8);
    assert_eq!(grid.width(), 8);
    assert_eq!(grid.height(), 8);
    for row in 0..8 {
        for col in 0..8 {
            assert_eq!(grid.get(Position::new(col, row)), Some(None));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::new(6, 4);
    assert_eq!(grid.get(Position::new(6, 0)), None);
    assert_eq!(grid.get(Position::new(0, 4)), None);
    assert_eq!(grid.get(Position::new(255, 255)), None);
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(5, 5);
    assert!(grid.set(Position::new(2, 1), Some(TileKind::Amethyst)));
    assert_eq!(grid.kind_at(Position::new(2, 1)), Some(TileKind::Amethyst));

    assert!(grid.set(Position::new(2, 1), None));
    assert_eq!(grid.kind_at(Position::new(2, 1)), None);

    assert!(!grid.set(Position::new(0, 5), Some(TileKind::Ruby)));
}

#[test]
fn test_grid_rectangular_dimensions() {
    // Non-square boards index correctly in both directions
    let mut grid = Grid::new(4, 9);
    assert!(grid.set(Position::new(3, 8), Some(TileKind::Quartz)));
    assert_eq!(grid.kind_at(Position::new(3, 8)), Some(TileKind::Quartz));
    assert_eq!(grid.get(Position::new(8, 3)), None);
}

#[test]
fn test_grid_swap_and_revert_is_identity() {
    let mut grid = Grid::from_glyphs(&["RAES", "AESR", "ESRA", "SRAE"]);
    let before = grid.clone();
    let a = Position::new(1, 2);
    let b = Position::new(1, 3);
    assert!(grid.swap(a, b));
    assert_ne!(grid, before);
    assert!(grid.swap(a, b));
    assert_eq!(grid, before);
}

#[test]
fn test_glyph_fixture_roundtrip() {
    let fixture = ["RAES", "MTQ.", "...."];
    let grid = Grid::from_glyphs(&fixture);
    assert_eq!(grid.to_glyphs(), fixture);
    assert_eq!(grid.empty_count(), 5);
}
