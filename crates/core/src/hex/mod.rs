//! This module holds the coordinate types for hexagon grids, and the math to
//! convert between them.
//!
//! ## Coordinate Systems
//!
//! All grids here use **flat-topped** hexagons, meaning each hexagon has a
//! flat edge on top and bottom, and a vertex on the left and right. Columns of
//! hexagons are vertical, and every other column is offset by half a cell. See
//! [Amit Patel's guide](https://www.redblobgames.com/grids/hexagons/) for an
//! excellent visual reference; the names used here match that page.
//!
//! ### Cube Coordinates
//!
//! Each cell is addressed by three components, `q`, `s` and `r`. **For any
//! coordinate, `q + s + r = 0`.** The grid is two dimensional, but the third
//! axis makes most hex math symmetric and simple. See [CubeCoordinate].
//!
//! ### Axial Coordinates
//!
//! Since `q + s + r = 0`, one of the three components is redundant. Axial
//! coordinates are just cube coordinates described by `q` and `r` alone, with
//! `s` derived as `-q - r`. [CubeCoordinate::new] is the axial constructor, and
//! it's the one you should reach for most of the time.
//!
//! ### Offset Coordinates
//!
//! Offset coordinates are the familiar `(col, row)` pairs you would use to
//! store a rectangular map in a 2D array. We use the **odd-q** layout: odd
//! columns are offset half a cell (toward `+y`) relative to even columns.
//! Offset coordinates are convenient for storage, but nearly all math should
//! be done in cube space. See [OffsetCoordinate].
//!
//! ### Cartesian Space
//!
//! Cartesian space is the 2D `(x, y)` plane that a grid gets drawn onto. The
//! mapping is parameterized by a single cell size: the distance from the
//! center of a hexagon to any of its six vertices. The origin cell is centered
//! on `(0, 0)`, `+r` points straight up (`+y`), and `+q` points up and to the
//! right.
//!
//! ```text
//! +-------------------+
//! |        +y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        -y         |
//! +-------------------+
//! ```
//!
//! ## Integer vs Continuous
//!
//! Every coordinate type is generic over its [Component] type. Integer
//! coordinates (`i32`) refer to whole cells. Continuous coordinates (`f64`)
//! can refer to any point in the grid, e.g. a mouse position that hasn't been
//! snapped to a cell yet. Widening an integer coordinate is always exact.
//! Narrowing a continuous coordinate requires a [RoundingMode].
//!
//! Continuous components are compared with an absolute tolerance of
//! [EPSILON]. Every equality check in this crate, including comparisons
//! between an integer and a continuous coordinate, goes through [ApproxEq].

mod component;
mod cube;
mod offset;
mod projection;
mod rounding;

pub use self::{
    component::{components_eq, ApproxEq, Component, EPSILON},
    cube::CubeCoordinate,
    offset::OffsetCoordinate,
    projection::{cube_to_point, point_to_axial},
    rounding::{RoundingMode, UnsupportedRoundingMode},
};
