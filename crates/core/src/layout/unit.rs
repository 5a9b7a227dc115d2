use derive_more::{Add, Display, From, Into, Mul, Neg, Sub, Sum};
use serde::{Deserialize, Serialize};

/// A 2D point in Cartesian space. See module-level docs in [crate::hex] for
/// how the grid is laid out on this plane.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Display,
    PartialEq,
    From,
    Into,
    Add,
    Sub,
    Mul,
    Neg,
    Sum,
    Serialize,
    Deserialize,
)]
#[display(fmt = "({}, {})", x, y)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<nalgebra::Point2<f64>> for Point2 {
    fn from(other: nalgebra::Point2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for nalgebra::Point2<f64> {
    fn from(other: Point2) -> Self {
        Self::new(other.x, other.y)
    }
}

// A vector is treated as an offset from the origin
impl From<nalgebra::Vector2<f64>> for Point2 {
    fn from(other: nalgebra::Vector2<f64>) -> Self {
        Self {
            x: other.x,
            y: other.y,
        }
    }
}

impl From<Point2> for nalgebra::Vector2<f64> {
    fn from(other: Point2) -> Self {
        Self::new(other.x, other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Point2::new(1.0, 2.0);
        let b = Point2::new(0.5, -1.0);
        assert_eq!(a + b, Point2::new(1.5, 1.0));
        assert_eq!(a - b, Point2::new(0.5, 3.0));
        assert_eq!(a * 2.0, Point2::new(2.0, 4.0));
        assert_eq!(-a, Point2::new(-1.0, -2.0));
        assert_eq!(vec![a, b].into_iter().sum::<Point2>(), a + b);
    }

    #[test]
    fn test_nalgebra() {
        let point: Point2 = nalgebra::Point2::new(3.0, -4.0).into();
        assert_eq!(point, Point2::new(3.0, -4.0));
        let back: nalgebra::Point2<f64> = point.into();
        assert_eq!(back, nalgebra::Point2::new(3.0, -4.0));

        let vector: nalgebra::Vector2<f64> = point.into();
        assert_eq!(vector.norm(), 5.0);
        assert_eq!(Point2::from(vector), point);
    }

    #[test]
    fn test_tuple() {
        assert_eq!(Point2::from((1.0, 2.0)), Point2::new(1.0, 2.0));
        let (x, y): (f64, f64) = Point2::new(1.0, 2.0).into();
        assert_eq!((x, y), (1.0, 2.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point2::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }
}
