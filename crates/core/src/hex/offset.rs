use crate::{
    hex::{
        component::{components_eq, ApproxEq, Component},
        CubeCoordinate, RoundingMode,
    },
    layout::unit::Point2,
};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A position in the hex grid, in odd-q offset coordinates: odd columns are
/// offset by half a cell (toward `+y` in Cartesian space) relative to even
/// columns. Any `(col, row)` pair is a valid coordinate.
///
/// Offset coordinates are a storage-friendly view of the grid. All math,
/// including projection to and from Cartesian space, goes through
/// [CubeCoordinate], and narrowing a continuous offset coordinate to a whole
/// cell rounds in cube space.
///
/// Equality follows the same rules as [CubeCoordinate].
#[derive(Copy, Clone, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {})", col, row)]
pub struct OffsetCoordinate<T: Component> {
    col: T,
    row: T,
}

impl<T: Component> OffsetCoordinate<T> {
    pub fn new(col: T, row: T) -> Self {
        Self { col, row }
    }

    pub fn col(&self) -> T {
        self.col
    }

    pub fn row(&self) -> T {
        self.row
    }

    pub fn with_col(self, col: T) -> Self {
        Self { col, ..self }
    }

    pub fn with_row(self, row: T) -> Self {
        Self { row, ..self }
    }

    /// Convert to cube coordinates. This is the exact inverse of
    /// [CubeCoordinate::to_offset].
    pub fn to_cube(self) -> CubeCoordinate<T> {
        let q = self.col;
        let r = self.row - (self.col - self.col.parity()).half();
        CubeCoordinate::new(q, r)
    }

    /// Project the center of this coordinate into 2D Cartesian space. See
    /// [CubeCoordinate::to_cartesian].
    pub fn to_cartesian(self, size: f64) -> Point2 {
        self.to_cube().to_cartesian(size)
    }
}

impl OffsetCoordinate<f64> {
    pub const ORIGIN: Self = Self { col: 0.0, row: 0.0 };

    /// Find the exact position in the grid of a point in Cartesian space.
    /// See `CubeCoordinate::<f64>::from_cartesian`.
    pub fn from_cartesian(point: Point2, size: f64) -> Self {
        CubeCoordinate::<f64>::from_cartesian(point, size).to_offset()
    }

    /// Round this coordinate to a whole cell. The rounding happens in cube
    /// space, so a continuous row is **not** simply ceiled/floored on its
    /// own. See `CubeCoordinate::<f64>::to_int`.
    pub fn to_int(self, mode: RoundingMode) -> OffsetCoordinate<i32> {
        self.to_cube().to_int(mode).to_offset()
    }
}

impl OffsetCoordinate<i32> {
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    /// Find the cell that a point in Cartesian space falls in. See
    /// `CubeCoordinate::<i32>::from_cartesian`.
    pub fn from_cartesian(
        point: Point2,
        size: f64,
        mode: RoundingMode,
    ) -> Self {
        CubeCoordinate::<i32>::from_cartesian(point, size, mode).to_offset()
    }

    /// Widen to a continuous coordinate. This is always exact.
    pub fn to_float(self) -> OffsetCoordinate<f64> {
        OffsetCoordinate {
            col: self.col.into(),
            row: self.row.into(),
        }
    }
}

impl From<OffsetCoordinate<i32>> for OffsetCoordinate<f64> {
    fn from(other: OffsetCoordinate<i32>) -> Self {
        other.to_float()
    }
}

impl<T: Component, U: Component> ApproxEq<OffsetCoordinate<U>>
    for OffsetCoordinate<T>
{
    fn approx_eq(&self, other: &OffsetCoordinate<U>) -> bool {
        components_eq(self.col, other.col) && components_eq(self.row, other.row)
    }
}

impl<T: Component> PartialEq for OffsetCoordinate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Eq for OffsetCoordinate<i32> {}

impl Hash for OffsetCoordinate<i32> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.col.hash(state);
        self.row.hash(state);
    }
}
