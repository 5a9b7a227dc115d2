//! Hexmath is a small library for the coordinate math of flat-top hexagon
//! grids. It converts between cube, axial and odd-q offset coordinates, and
//! between grid coordinates and 2D Cartesian space, for both whole cells
//! (integer coordinates) and arbitrary points within the grid (continuous
//! coordinates).
//!
//! ```
//! use hexmath::{CubeCoordinate, HexLayout, HexLayoutConfig, RoundingMode};
//!
//! let layout = HexLayout::new(HexLayoutConfig { cell_size: 1.0 }).unwrap();
//! let cell = CubeCoordinate::new(1, 0);
//! let point = layout.cube_to_point(cell);
//! assert_eq!(layout.point_to_cube(point, RoundingMode::Floor), cell);
//! assert_eq!(cell.to_offset().to_cube(), cell);
//! ```
//!
//! See the [hex] module for a description of the coordinate systems.

pub mod hex;
mod layout;

pub use crate::{
    hex::{
        ApproxEq, Component, CubeCoordinate, OffsetCoordinate, RoundingMode,
        UnsupportedRoundingMode, EPSILON,
    },
    layout::{config::HexLayoutConfig, unit::Point2, HexLayout},
};
