//! Catalog, spawn and rotation tests.

use blockfall::core::{catalog_entry, Piece, Shape, CATALOG};
use blockfall::types::{Rgb, ShapeKind};

#[test]
fn catalog_colors() {
    let colors: Vec<String> = CATALOG.iter().map(|e| e.color.to_hex()).collect();
    assert_eq!(
        colors,
        ["#00FFFF", "#FFFF00", "#FF00FF", "#00FF00", "#FF0000", "#0000FF", "#FFA500"]
    );
    assert_eq!(catalog_entry(ShapeKind::L).color, Rgb::new(255, 165, 0));
}

#[test]
fn every_shape_has_four_cells() {
    for entry in CATALOG.iter() {
        assert_eq!(entry.shape.cells().len(), 4, "{:?}", entry.kind);
    }
}

#[test]
fn four_rotations_are_the_identity() {
    for entry in CATALOG.iter() {
        let shape = entry.shape;
        let back = shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw();
        assert_eq!(back, shape, "{:?}", entry.kind);
    }
}

#[test]
fn rotation_swaps_dimensions() {
    let i = catalog_entry(ShapeKind::I).shape.rotate_cw();
    assert_eq!((i.width(), i.height()), (1, 4));
    assert_eq!(i.to_pattern(), ["#", "#", "#", "#"]);

    let j = catalog_entry(ShapeKind::J).shape.rotate_cw();
    assert_eq!(j.to_pattern(), ["##", "#.", "#."]);
}

#[test]
fn o_is_rotation_invariant() {
    let o = catalog_entry(ShapeKind::O).shape;
    assert_eq!(o.rotate_cw(), o);
}

#[test]
fn spawn_position_centers_on_row_zero() {
    let cases = [
        (ShapeKind::I, 10, 3),
        (ShapeKind::O, 10, 4),
        (ShapeKind::T, 10, 4),
        (ShapeKind::I, 7, 1),
        (ShapeKind::O, 4, 1),
    ];
    for (kind, cols, x) in cases {
        let piece = Piece::spawn(kind, cols);
        assert_eq!((piece.x, piece.y), (x, 0), "{kind:?} on {cols} columns");
    }
}

#[test]
fn piece_transforms_are_pure() {
    let piece = Piece::spawn(ShapeKind::T, 10);
    let moved = piece.translate(-2, 3);
    let turned = piece.rotate();

    assert_eq!((piece.x, piece.y), (4, 0));
    assert_eq!((moved.x, moved.y), (2, 3));
    assert_eq!(moved.shape, piece.shape);
    assert_eq!((turned.x, turned.y), (4, 0));
    assert_eq!(turned.shape.to_pattern(), [".#", "##", ".#"]);
}

#[test]
fn absolute_cells_follow_the_origin() {
    let piece = Piece::spawn(ShapeKind::S, 10).translate(0, 5);
    let cells: Vec<(i32, i32)> = piece.cells().collect();
    assert_eq!(cells, [(5, 5), (6, 5), (4, 6), (5, 6)]);
}

#[test]
fn pattern_round_trip() {
    let shape = Shape::from_pattern(&["#.", "##", ".#"]);
    assert_eq!(shape.to_pattern(), ["#.", "##", ".#"]);
}
