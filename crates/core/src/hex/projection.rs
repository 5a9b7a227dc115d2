//! Projection between the hex grid and 2D Cartesian space. These are the raw
//! formulas; most callers should go through the coordinate types or a
//! [HexLayout](crate::HexLayout) instead.
//!
//! <https://www.redblobgames.com/grids/hexagons/#hex-to-pixel>

use crate::layout::unit::Point2;

const SQRT_3: f64 = 1.732_050_807_568_877_2;

/// Project the axial components of a cube coordinate into Cartesian space.
/// `size` is the distance from the center of a cell to any of its vertices.
/// `s` isn't needed, since it's fully determined by `q` and `r`.
pub fn cube_to_point(q: f64, r: f64, size: f64) -> Point2 {
    let x = size * (1.5 * q);
    let y = size * (SQRT_3 / 2.0 * q + SQRT_3 * r);
    Point2 { x, y }
}

/// The inverse of [cube_to_point]. Returns the continuous `(q, r)` components
/// of the point, which typically fall between cell centers. `size` must be
/// non-zero.
pub fn point_to_axial(point: Point2, size: f64) -> (f64, f64) {
    let q = (2.0 * point.x / 3.0) / size;
    let r = (-point.x / 3.0 + SQRT_3 / 3.0 * point.y) / size;
    (q, r)
}
