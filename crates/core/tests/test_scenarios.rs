//! End-to-end conversions for a handful of known cells, checked against
//! hand-computed values.

use assert_approx_eq::assert_approx_eq;
use hexmath::{
    ApproxEq, CubeCoordinate, HexLayout, HexLayoutConfig, OffsetCoordinate,
    Point2, RoundingMode, UnsupportedRoundingMode,
};
use strum::IntoEnumIterator;

fn unit_layout() -> HexLayout {
    HexLayout::new(HexLayoutConfig { cell_size: 1.0 }).unwrap()
}

#[test]
fn test_cube_to_offset_and_point() {
    let cell = CubeCoordinate::new_qsr(1, -1, 0);
    assert_eq!(cell.to_offset(), OffsetCoordinate::new(1, 0));

    let point = unit_layout().cube_to_point(cell);
    assert_approx_eq!(point.x, 1.5);
    assert_approx_eq!(point.y, 0.866, 1e-3);
}

#[test]
fn test_offset_to_cube() {
    let cube = OffsetCoordinate::new(2, 0).to_cube();
    assert_eq!(cube.q(), 2);
    assert_eq!(cube.s(), -1);
    assert_eq!(cube.r(), -1);
}

#[test]
fn test_point_to_cell() {
    let layout = unit_layout();
    let point = Point2 { x: 1.5, y: 0.866 };

    let exact = layout.point_to_cube_float(point);
    assert!(exact.approx_eq(&CubeCoordinate::new_qsr(1, -1, 0)));

    for mode in RoundingMode::iter() {
        let cell = layout.point_to_cube(point, mode);
        assert_eq!(cell, CubeCoordinate::new_qsr(1, -1, 0), "{mode}");
        assert_eq!(
            layout.point_to_offset(point, mode),
            OffsetCoordinate::new(1, 0),
            "{mode}"
        );
    }
}

#[test]
fn test_mode_from_config_text() {
    let mode: RoundingMode = serde_json::from_str(r#""floor""#).unwrap();
    assert_eq!(mode, RoundingMode::Floor);
    assert!(serde_json::from_str::<RoundingMode>(r#""nearest""#).is_err());

    let err = "nearest".parse::<RoundingMode>().unwrap_err();
    assert_eq!(err, UnsupportedRoundingMode("nearest".into()));
}

#[test]
fn test_coordinates_json() {
    let cell = CubeCoordinate::new(3, -1);
    let json = serde_json::to_string(&cell).unwrap();
    assert_eq!(json, r#"{"q":3,"s":-2,"r":-1}"#);
    assert_eq!(
        serde_json::from_str::<CubeCoordinate<i32>>(&json).unwrap(),
        cell
    );

    let offset: OffsetCoordinate<f64> =
        serde_json::from_str(r#"{"col":1.5,"row":-2}"#).unwrap();
    assert_eq!(offset, OffsetCoordinate::new(1.5, -2.0));
}
