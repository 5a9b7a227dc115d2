use crate::{
    hex::{
        component::{components_eq, ApproxEq, Component},
        projection::{cube_to_point, point_to_axial},
        OffsetCoordinate, RoundingMode,
    },
    layout::unit::Point2,
};
use derive_more::Display;
use log::trace;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A position in the hex grid, in cube coordinates. See the module-level
/// documentation for a description of the coordinate system.
///
/// **For any valid coordinate, `q + s + r = 0`.** For integer coordinates
/// this is exact. For continuous coordinates the sum must be within
/// [EPSILON](crate::EPSILON) of zero.
///
/// The component type is generic, so the same type covers whole cells
/// (`CubeCoordinate<i32>`) and arbitrary points in the grid
/// (`CubeCoordinate<f64>`). Conversions between the two are always explicit:
/// [CubeCoordinate::to_float] widens exactly, [CubeCoordinate::to_int] rounds
/// with a [RoundingMode].
///
/// ## Construction
///
/// Prefer [CubeCoordinate::new], which takes only the two independent axial
/// components and derives `s`, so the result is valid by construction.
/// [CubeCoordinate::new_qsr] takes all three components and trusts the caller
/// to keep them consistent.
///
/// ## Equality
///
/// Coordinates are compared component-wise using [ApproxEq], both with each
/// other and with coordinates of the other component type. Integer
/// coordinates are also [Eq] and [Hash]. Continuous coordinates intentionally
/// don't implement [Hash], since no hash function can agree with a tolerance
/// comparison.
///
/// ## Serialization
///
/// Coordinates serialize as `{q, s, r}`. Deserialization checks the
/// invariant, and rejects any coordinate where `q + s + r != 0`.
#[derive(Copy, Clone, Debug, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {}, {})", q, s, r)]
#[serde(
    try_from = "CubeFields<T>",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct CubeCoordinate<T: Component> {
    q: T,
    s: T,
    r: T,
}

/// Unchecked wire form of [CubeCoordinate]
#[derive(Deserialize)]
#[serde(rename = "CubeCoordinate")]
struct CubeFields<T> {
    q: T,
    s: T,
    r: T,
}

impl<T: Component> TryFrom<CubeFields<T>> for CubeCoordinate<T> {
    type Error = String;

    fn try_from(fields: CubeFields<T>) -> Result<Self, Self::Error> {
        let CubeFields { q, s, r } = fields;
        let coord = Self { q, s, r };
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(coord.invalid_message())
        }
    }
}

impl<T: Component> CubeCoordinate<T> {
    /// Construct a new coordinate from its axial components. Since
    /// `q + s + r = 0` for all coordinates, `s` is derived as `-q - r`.
    pub fn new(q: T, r: T) -> Self {
        Self { q, s: -q - r, r }
    }

    /// Construct a new coordinate from all three components. **The caller is
    /// responsible for ensuring `q + s + r = 0`.** This is only checked with a
    /// debug assertion, so an invalid coordinate will slip through in
    /// release builds. Use [Self::new] unless you already have all three
    /// components on hand.
    pub fn new_qsr(q: T, s: T, r: T) -> Self {
        let coord = Self { q, s, r };
        coord.debug_assert_valid();
        coord
    }

    pub fn q(&self) -> T {
        self.q
    }

    pub fn s(&self) -> T {
        self.s
    }

    pub fn r(&self) -> T {
        self.r
    }

    /// Get a copy of this coordinate with `q` replaced. The other components
    /// are **not** adjusted to compensate, so unless the new value equals the
    /// old one, the result is invalid until another component is replaced
    /// to match. Use [Self::is_valid] to check the final result.
    pub fn with_q(self, q: T) -> Self {
        Self { q, ..self }
    }

    /// Get a copy of this coordinate with `s` replaced. See [Self::with_q]
    /// for the caveat about validity.
    pub fn with_s(self, s: T) -> Self {
        Self { s, ..self }
    }

    /// Get a copy of this coordinate with `r` replaced. See [Self::with_q]
    /// for the caveat about validity.
    pub fn with_r(self, r: T) -> Self {
        Self { r, ..self }
    }

    /// Does this coordinate satisfy `q + s + r = 0`? Always true for
    /// coordinates built via [Self::new] or any conversion, but coordinates
    /// built via [Self::new_qsr] or `with_*` could be invalid.
    pub fn is_valid(&self) -> bool {
        // Sum as floats so huge integer components can't overflow
        let sum: f64 = self.q.into() + self.s.into() + self.r.into();
        components_eq(sum, 0.0)
    }

    fn invalid_message(&self) -> String {
        format!("Invalid cube coordinate {self}; must satisfy q+s+r=0")
    }

    fn debug_assert_valid(&self) {
        debug_assert!(self.is_valid(), "{}", self.invalid_message());
    }

    /// Convert to odd-q offset coordinates. The column is just `q`, and the
    /// row is `r` plus half of `q`, rounded toward negative infinity.
    pub fn to_offset(self) -> OffsetCoordinate<T> {
        self.debug_assert_valid();
        let col = self.q;
        let row = self.r + (self.q - self.q.parity()).half();
        OffsetCoordinate::new(col, row)
    }

    /// Project this coordinate into 2D Cartesian space. `size` is the
    /// distance between the center of a cell and any of its vertices.
    pub fn to_cartesian(self, size: f64) -> Point2 {
        self.debug_assert_valid();
        cube_to_point(self.q.into(), self.r.into(), size)
    }
}

impl CubeCoordinate<f64> {
    pub const ORIGIN: Self = Self {
        q: 0.0,
        s: 0.0,
        r: 0.0,
    };

    /// Find the exact position in the grid of a point in Cartesian space. This
    /// is the inverse of [Self::to_cartesian]. `size` must be non-zero.
    pub fn from_cartesian(point: Point2, size: f64) -> Self {
        let (q, r) = point_to_axial(point, size);
        Self::new(q, r)
    }

    /// Round this coordinate to a whole cell. Only `q` and `r` are rounded;
    /// `s` is re-derived so the result is always valid. Coordinates too far
    /// from the origin saturate at [RoundingMode::AXIAL_LIMIT]. See
    /// [RoundingMode] for how each mode behaves.
    pub fn to_int(self, mode: RoundingMode) -> CubeCoordinate<i32> {
        self.debug_assert_valid();
        mode.round_axial(self.q, self.r)
    }
}

impl CubeCoordinate<i32> {
    pub const ORIGIN: Self = Self { q: 0, s: 0, r: 0 };

    /// Find the cell that a point in Cartesian space falls in. The point is
    /// first converted to a continuous coordinate, then rounded according to
    /// the given mode. Note that rounding is directional, so the returned cell
    /// is not necessarily the one whose hexagon contains the point. See
    /// [RoundingMode].
    pub fn from_cartesian(
        point: Point2,
        size: f64,
        mode: RoundingMode,
    ) -> Self {
        let exact = CubeCoordinate::<f64>::from_cartesian(point, size);
        let cell = exact.to_int(mode);
        trace!(
            "Rounded point {} ({}) to cell {} ({})",
            point,
            exact,
            cell,
            mode
        );
        cell
    }

    /// Widen to a continuous coordinate. This is always exact.
    pub fn to_float(self) -> CubeCoordinate<f64> {
        CubeCoordinate {
            q: self.q.into(),
            s: self.s.into(),
            r: self.r.into(),
        }
    }
}

impl From<CubeCoordinate<i32>> for CubeCoordinate<f64> {
    fn from(other: CubeCoordinate<i32>) -> Self {
        other.to_float()
    }
}

impl<T: Component, U: Component> ApproxEq<CubeCoordinate<U>>
    for CubeCoordinate<T>
{
    fn approx_eq(&self, other: &CubeCoordinate<U>) -> bool {
        components_eq(self.q, other.q)
            && components_eq(self.s, other.s)
            && components_eq(self.r, other.r)
    }
}

impl<T: Component> PartialEq for CubeCoordinate<T> {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

// Tolerance equality is exact for integers, so these are sound
impl Eq for CubeCoordinate<i32> {}

impl Hash for CubeCoordinate<i32> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.q.hash(state);
        self.s.hash(state);
        self.r.hash(state);
    }
}
