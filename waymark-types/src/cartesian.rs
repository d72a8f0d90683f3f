//! Points in the map's native (projected) coordinate space.

pub use nalgebra::Point2;
use nalgebra::Scalar;
use num_traits::{Bounded, FromPrimitive, Num};

/// Standard 2d point in projected map coordinates.
pub type Point2d = Point2<f64>;

/// A point in a cartesian coordinate space.
pub trait CartesianPoint2d {
    /// Numeric type used to represent coordinates.
    type Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive;

    /// X coordinate.
    fn x(&self) -> Self::Num;
    /// Y coordinate.
    fn y(&self) -> Self::Num;

    /// Returns true if both coordinates of the points are equal.
    fn equal(&self, other: &impl CartesianPoint2d<Num = Self::Num>) -> bool {
        self.x() == other.x() && self.y() == other.y()
    }
}

/// A cartesian point that can be constructed from a coordinate pair.
pub trait NewCartesianPoint2d<Num = f64>: CartesianPoint2d<Num = Num> {
    /// Creates a new point with the given coordinates.
    fn new(x: Num, y: Num) -> Self;
}

impl<Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> CartesianPoint2d
    for Point2<Num>
{
    type Num = Num;

    fn x(&self) -> Num {
        self.x
    }
    fn y(&self) -> Num {
        self.y
    }
}

impl<Num: Num + Copy + PartialOrd + Bounded + Scalar + FromPrimitive> NewCartesianPoint2d<Num>
    for Point2<Num>
{
    fn new(x: Num, y: Num) -> Self {
        Point2::new(x, y)
    }
}
