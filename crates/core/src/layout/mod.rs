pub mod config;
pub mod unit;

use crate::{
    hex::{Component, CubeCoordinate, OffsetCoordinate, RoundingMode},
    layout::{config::HexLayoutConfig, unit::Point2},
};
use log::debug;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A hex layout binds a grid to a particular cell size, so that coordinates
/// can be moved in and out of Cartesian space without passing the size
/// around. A layout is created from a [HexLayoutConfig], and from there can
/// convert any number of coordinates.
///
/// Config options cannot be changed after creating a layout, but layouts are
/// very cheap to create so if you need a different size, just create a new
/// layout.
///
/// A deserialized layout goes through the same validation as
/// [HexLayout::new].
#[derive(Copy, Clone, Debug, Default, Serialize, Deserialize)]
#[serde(try_from = "LayoutFields")]
pub struct HexLayout {
    config: HexLayoutConfig,
}

/// Unchecked wire form of [HexLayout]
#[derive(Deserialize)]
#[serde(rename = "HexLayout")]
struct LayoutFields {
    config: HexLayoutConfig,
}

impl TryFrom<LayoutFields> for HexLayout {
    type Error = anyhow::Error;

    fn try_from(fields: LayoutFields) -> anyhow::Result<Self> {
        Self::new(fields.config)
    }
}

impl HexLayout {
    /// Initialize a new layout with the given options. Returns an error if
    /// the config is invalid.
    pub fn new(config: HexLayoutConfig) -> anyhow::Result<Self> {
        config.validate()?;
        anyhow::ensure!(
            config.cell_size.is_finite(),
            "Cell size must be finite, but was {}",
            config.cell_size
        );
        debug!("Created hex layout with cell size {}", config.cell_size);
        Ok(Self { config })
    }

    /// Get a reference to the config that this layout uses
    pub fn config(&self) -> &HexLayoutConfig {
        &self.config
    }

    /// Distance between the center of a cell and one of its 6 vertices
    pub fn cell_size(&self) -> f64 {
        self.config.cell_size
    }

    /// Distance between two opposite **vertices** of a cell, i.e. the full
    /// width of a flat-topped cell.
    pub fn cell_width(&self) -> f64 {
        self.cell_size() * 2.0
    }

    /// Distance between two opposite **sides** of a cell, i.e. the full
    /// height of a flat-topped cell.
    pub fn cell_height(&self) -> f64 {
        self.cell_size() * 3.0_f64.sqrt()
    }

    /// Distance **in the X axis only** between the centers of two adjacent
    /// columns.
    pub fn horizontal_spacing(&self) -> f64 {
        self.cell_size() * 1.5
    }

    /// Distance between the centers of two cells that are vertically adjacent
    /// in the same column.
    pub fn vertical_spacing(&self) -> f64 {
        self.cell_height()
    }

    /// Get the center of a cube coordinate in Cartesian space. Works for both
    /// whole cells and continuous positions.
    pub fn cube_to_point<T: Component>(
        &self,
        cube: CubeCoordinate<T>,
    ) -> Point2 {
        cube.to_cartesian(self.cell_size())
    }

    /// Find the cell that a Cartesian point falls in, rounding with the
    /// given mode. See [RoundingMode] for the caveats of directional
    /// rounding.
    pub fn point_to_cube(
        &self,
        point: Point2,
        mode: RoundingMode,
    ) -> CubeCoordinate<i32> {
        CubeCoordinate::<i32>::from_cartesian(point, self.cell_size(), mode)
    }

    /// Find the exact continuous grid position of a Cartesian point
    pub fn point_to_cube_float(&self, point: Point2) -> CubeCoordinate<f64> {
        CubeCoordinate::<f64>::from_cartesian(point, self.cell_size())
    }

    /// Get the center of an offset coordinate in Cartesian space
    pub fn offset_to_point<T: Component>(
        &self,
        offset: OffsetCoordinate<T>,
    ) -> Point2 {
        offset.to_cartesian(self.cell_size())
    }

    /// Offset equivalent of [Self::point_to_cube]. Rounding happens in cube
    /// space.
    pub fn point_to_offset(
        &self,
        point: Point2,
        mode: RoundingMode,
    ) -> OffsetCoordinate<i32> {
        OffsetCoordinate::<i32>::from_cartesian(point, self.cell_size(), mode)
    }

    pub fn point_to_offset_float(
        &self,
        point: Point2,
    ) -> OffsetCoordinate<f64> {
        OffsetCoordinate::<f64>::from_cartesian(point, self.cell_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use strum::IntoEnumIterator;

    fn layout(cell_size: f64) -> HexLayout {
        HexLayout::new(HexLayoutConfig { cell_size }).unwrap()
    }

    #[test]
    fn test_new_invalid() {
        assert!(HexLayout::new(HexLayoutConfig { cell_size: 0.0 }).is_err());
        assert!(HexLayout::new(HexLayoutConfig { cell_size: -2.0 }).is_err());
        assert!(
            HexLayout::new(HexLayoutConfig {
                cell_size: f64::INFINITY
            })
            .is_err()
        );
    }

    #[test]
    fn test_dimensions() {
        let layout = layout(2.0);
        assert_eq!(layout.cell_size(), 2.0);
        assert_eq!(layout.cell_width(), 4.0);
        assert_approx_eq!(layout.cell_height(), 2.0 * 3.0_f64.sqrt());
        assert_eq!(layout.horizontal_spacing(), 3.0);
        assert_eq!(layout.vertical_spacing(), layout.cell_height());
    }

    #[test]
    fn test_spacing_matches_projection() {
        let layout = layout(3.0);
        let origin = layout.offset_to_point(OffsetCoordinate::new(0, 0));
        let right = layout.offset_to_point(OffsetCoordinate::new(2, 0));
        let up = layout.offset_to_point(OffsetCoordinate::new(0, 1));
        let spacing = layout.horizontal_spacing();
        assert_approx_eq!(right.x - origin.x, 2.0 * spacing);
        assert_approx_eq!(right.y, origin.y);
        assert_approx_eq!(up.y - origin.y, layout.vertical_spacing());
    }

    #[test]
    fn test_cube_round_trip() {
        let layout = layout(0.5);
        let cell = CubeCoordinate::new(-4, 9);
        let point = layout.cube_to_point(cell);
        assert_eq!(layout.point_to_cube_float(point), cell.to_float());
        for mode in RoundingMode::iter() {
            assert_eq!(layout.point_to_cube(point, mode), cell, "{mode}");
        }
    }

    #[test]
    fn test_offset_round_trip() {
        let layout = layout(16.0);
        let cell = OffsetCoordinate::new(7, -3);
        let point = layout.offset_to_point(cell);
        assert_eq!(layout.point_to_offset_float(point), cell.to_float());
        for mode in RoundingMode::iter() {
            assert_eq!(layout.point_to_offset(point, mode), cell, "{mode}");
        }
    }

    #[test]
    fn test_default() {
        let layout = HexLayout::default();
        assert_eq!(layout.config(), &HexLayoutConfig::default());
        assert_eq!(layout.cell_size(), 1.0);
    }
}
