use crate::hex::{component::components_eq, CubeCoordinate};
use serde::{Deserialize, Serialize};
use std::{error::Error, str::FromStr};
use strum::{Display, EnumIter};

/// The policy used to snap a continuous coordinate onto a whole cell.
///
/// Rounding is **directional**, and applies to `q` and `r` independently.
/// `s` is never rounded on its own; it is always re-derived from the rounded
/// `q` and `r`, so the result always satisfies `q + s + r = 0`. A consequence
/// is that the rounded `s` can differ from rounding the continuous `s` in the
/// same direction.
///
/// **This is not nearest-cell rounding.** The usual "round all three
/// components, then fix the one with the largest error" technique picks the
/// cell whose hexagon contains the point. Directional rounding instead picks
/// a cell based on the enclosing axial parallelogram, which is simpler and
/// fully predictable, but can land on a neighbor of the cell that visually
/// contains the point.
///
/// Values that are within [EPSILON](crate::EPSILON) of a whole number are
/// treated as that whole number in both modes. That keeps rounding consistent
/// with equality: if a continuous coordinate compares equal to an integer
/// coordinate, it rounds to that coordinate.
#[derive(
    Copy,
    Clone,
    Debug,
    Display,
    EnumIter,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum RoundingMode {
    /// Round each component toward positive infinity
    Ceil,
    /// Round each component toward negative infinity
    Floor,
}

impl RoundingMode {
    /// Largest magnitude a rounded axial component can have. Past this,
    /// `s = -q - r` would not fit in an `i32`.
    pub const AXIAL_LIMIT: i32 = i32::MAX / 2;

    /// Round a single continuous component to a whole number. Out-of-range
    /// values saturate at the bounds of `i32`.
    pub fn round(self, value: f64) -> i32 {
        let nearest = value.round();
        if components_eq(value, nearest) {
            return nearest as i32;
        }

        match self {
            Self::Ceil => value.ceil() as i32,
            Self::Floor => value.floor() as i32,
        }
    }

    /// Round a pair of continuous axial components into a whole cell. `s` is
    /// derived from the rounded values. `q` and `r` saturate at
    /// [Self::AXIAL_LIMIT] in either direction, so the derived `s` always
    /// fits.
    pub fn round_axial(self, q: f64, r: f64) -> CubeCoordinate<i32> {
        let limit = Self::AXIAL_LIMIT;
        let q = self.round(q).clamp(-limit, limit);
        let r = self.round(r).clamp(-limit, limit);
        CubeCoordinate::new(q, r)
    }
}

impl FromStr for RoundingMode {
    type Err = UnsupportedRoundingMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ceil" => Ok(Self::Ceil),
            "floor" => Ok(Self::Floor),
            _ => Err(UnsupportedRoundingMode(s.to_owned())),
        }
    }
}

/// Error for when a rounding mode is requested by a name that doesn't match
/// any [RoundingMode]. There is no default mode to fall back on.
#[derive(Clone, Debug, derive_more::Display, PartialEq, Eq)]
#[display(fmt = "Unsupported rounding mode: {:?}", _0)]
pub struct UnsupportedRoundingMode(pub String);

impl Error for UnsupportedRoundingMode {}
