use serde::{Deserialize, Serialize};
use validator::Validate;

/// Configuration for a [HexLayout](crate::HexLayout), i.e. how a hex grid is
/// laid out in Cartesian space. Cells are always flat-topped, so the only
/// free parameter is their size.
///
/// Missing fields fall back to their defaults when deserializing, so an empty
/// object is a valid config.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct HexLayoutConfig {
    /// Distance between the center of a cell and any one of its 6 vertices,
    /// in Cartesian units. This is also the length of one side of a cell.
    /// Must be positive.
    #[validate(range(min = 0.000001))]
    pub cell_size: f64,
}

impl Default for HexLayoutConfig {
    fn default() -> Self {
        Self { cell_size: 1.0 }
    }
}
