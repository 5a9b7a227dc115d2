//! Numeric building blocks shared by every coordinate type: the [Component]
//! trait that abstracts over integer and continuous coordinates, and the one
//! tolerance rule that all equality checks use.

use std::{
    fmt::{Debug, Display},
    ops,
};

/// Absolute tolerance used when comparing continuous components, and when
/// checking the `q + s + r = 0` invariant of a continuous coordinate. Two
/// components are equal if they differ by no more than this value.
///
/// The tolerance is absolute, not relative, so it's the same at every
/// position in the grid. Keep in mind that tolerance equality is not
/// transitive: `a == b` and `b == c` does not guarantee `a == c` when the
/// differences stack up.
pub const EPSILON: f64 = 1e-4;

/// A trait for the primitive type of each component in a coordinate. This is
/// implemented for `i32` (whole cells) and `f64` (arbitrary points). Must be
/// convertible to `f64` so that any coordinate can be projected into Cartesian
/// space.
pub trait Component:
    'static
    + Copy
    + Debug
    + Display
    + PartialOrd
    + Into<f64>
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Neg<Output = Self>
{
    /// `self mod 2`, normalized to be non-negative. For integers this is
    /// always `0` or `1`, including for negative values. For floats it is in
    /// the range `[0, 2)`.
    fn parity(self) -> Self;

    /// Divide by two. Only ever applied to values that have had their parity
    /// subtracted out, so for integers the result is exact.
    fn half(self) -> Self;
}

impl Component for i32 {
    fn parity(self) -> Self {
        // Two's complement, so this gives 1 for negative odd numbers too
        self & 1
    }

    fn half(self) -> Self {
        self / 2
    }
}

impl Component for f64 {
    fn parity(self) -> Self {
        // % is remainder, *not* modulus, so -1 % 2 == -1. Shift it back into
        // the positive range
        ((self % 2.0) + 2.0) % 2.0
    }

    fn half(self) -> Self {
        self / 2.0
    }
}

/// Compare two components, possibly of different types, using the crate-wide
/// tolerance. This is the single equality rule behind every coordinate
/// comparison, so integer, continuous and mixed comparisons all agree.
///
/// For two integer components this is exact equality, since any two distinct
/// integers differ by at least 1.
pub fn components_eq<A: Component, B: Component>(a: A, b: B) -> bool {
    let a: f64 = a.into();
    let b: f64 = b.into();
    (a - b).abs() <= EPSILON
}

/// Equality between a coordinate and some comparable counterpart, e.g. an
/// integer cube coordinate and a continuous one. Implementations must be
/// symmetric, and must compare component-wise via [components_eq].
///
/// `==` between two coordinates of the same type delegates to this, so this
/// trait is mostly useful for comparing across the integer/continuous
/// boundary:
///
/// ```
/// use hexmath::{ApproxEq, CubeCoordinate};
///
/// let cell = CubeCoordinate::new(1, 0);
/// let point = CubeCoordinate::new(1.00001, -0.00001);
/// assert!(cell.approx_eq(&point));
/// assert!(point.approx_eq(&cell));
/// ```
pub trait ApproxEq<Rhs = Self> {
    fn approx_eq(&self, other: &Rhs) -> bool;
}
