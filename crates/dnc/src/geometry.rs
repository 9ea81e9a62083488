use std::fmt;

/// A point in the plane. Equality is by coordinate value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Coincident points are `0.0` apart even at infinite coordinates, where
    /// the coordinate difference would be NaN. Other non-finite inputs give
    /// non-finite distances.
    #[inline]
    pub fn distance_to(&self, other: &Point) -> f64 {
        if self == other {
            return 0.0;
        }
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Unordered: `(a, b)` and `(b, a)` compare equal.
#[derive(Clone, Copy, Debug)]
pub struct PointPair {
    pub first: Point,
    pub second: Point,
    pub distance: f64,
}

impl PointPair {
    pub fn new(first: Point, second: Point) -> Self {
        Self::with_distance(first, second, first.distance_to(&second))
    }

    pub const fn with_distance(first: Point, second: Point, distance: f64) -> Self {
        Self {
            first,
            second,
            distance,
        }
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.first == *point || self.second == *point
    }

    #[inline]
    pub fn closer_than(&self, other: &PointPair) -> bool {
        self.distance < other.distance
    }
}

impl PartialEq for PointPair {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance
            && ((self.first == other.first && self.second == other.second)
                || (self.first == other.second && self.second == other.first))
    }
}

impl fmt::Display for PointPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair[{}, {}] distance={:.6}", self.first, self.second, self.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-12);
        assert_eq!(a.distance_to(&b), b.distance_to(&a));
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn coincident_infinite_points_are_zero_apart() {
        let cases = [
            Point::new(f64::NEG_INFINITY, 0.0),
            Point::new(f64::INFINITY, f64::INFINITY),
            Point::new(1.0, f64::NEG_INFINITY),
        ];
        for p in cases {
            assert_eq!(p.distance_to(&p), 0.0, "{p}");
        }
    }

    #[test]
    fn pair_equality_is_symmetric() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(-4.0, 0.5);
        let ab = PointPair::new(a, b);
        let ba = PointPair::new(b, a);
        assert_eq!(ab, ba);
        assert!(ab.contains(&a) && ab.contains(&b));
        assert_ne!(ab, PointPair::new(a, Point::new(9.0, 9.0)));
    }

    #[test]
    fn pair_ordering_is_by_distance() {
        let origin = Point::default();
        let near = PointPair::new(origin, Point::new(1.0, 0.0));
        let far = PointPair::new(origin, Point::new(0.0, 2.0));
        assert!(near.closer_than(&far));
        assert!(!far.closer_than(&near));
        assert!(!near.closer_than(&near));
    }

    #[test]
    fn display_format() {
        let pair = PointPair::new(Point::from((0.0, 0.0)), Point::from((3.0, 4.0)));
        assert_eq!(pair.to_string(), "Pair[(0, 0), (3, 4)] distance=5.000000");
    }
}
