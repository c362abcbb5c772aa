//! Geographic geometry primitives.
//!
//! This module contains the pure bounds/corner mathematics used when
//! finalizing captured shapes, extracted for testability: nothing here
//! touches a map surface.

use serde::{Deserialize, Serialize};

/// A geographic point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned geographic bounding box.
///
/// Invariant after construction through [`BoundingBox::of`] or
/// [`BoundingBox::spanning`]: `north >= south` and `east >= west`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

impl BoundingBox {
    /// Compute the minimal bounding box enclosing all points.
    ///
    /// Returns `None` for an empty slice.
    pub fn of(points: &[Coordinate]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            north: first.lat,
            south: first.lat,
            east: first.lng,
            west: first.lng,
        };
        for point in &points[1..] {
            bounds.north = bounds.north.max(point.lat);
            bounds.south = bounds.south.min(point.lat);
            bounds.east = bounds.east.max(point.lng);
            bounds.west = bounds.west.min(point.lng);
        }
        Some(bounds)
    }

    /// Normalized span of two corner points.
    ///
    /// The result is independent of which corner is which, so a drag from
    /// bottom-right to top-left yields the same box as the reverse drag.
    pub fn spanning(a: Coordinate, b: Coordinate) -> Self {
        Self {
            north: a.lat.max(b.lat),
            south: a.lat.min(b.lat),
            east: a.lng.max(b.lng),
            west: a.lng.min(b.lng),
        }
    }

    /// The four corner coordinates in fixed NW, NE, SE, SW order.
    pub fn corners(&self) -> [Coordinate; 4] {
        [
            Coordinate::new(self.north, self.west),
            Coordinate::new(self.north, self.east),
            Coordinate::new(self.south, self.east),
            Coordinate::new(self.south, self.west),
        ]
    }

    /// The center of the box.
    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.north + self.south) / 2.0,
            (self.east + self.west) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_of_empty() {
        assert_eq!(BoundingBox::of(&[]), None);
    }

    #[test]
    fn test_bounds_of_single_point() {
        let bounds = BoundingBox::of(&[Coordinate::new(1.5, -2.5)]).unwrap();
        assert_eq!(bounds.north, 1.5);
        assert_eq!(bounds.south, 1.5);
        assert_eq!(bounds.east, -2.5);
        assert_eq!(bounds.west, -2.5);
    }

    #[test]
    fn test_bounds_of_points() {
        let points = [
            Coordinate::new(0.0, 0.0),
            Coordinate::new(1.0, 0.0),
            Coordinate::new(1.0, 1.0),
        ];
        let bounds = BoundingBox::of(&points).unwrap();
        assert_eq!(bounds.north, 1.0);
        assert_eq!(bounds.south, 0.0);
        assert_eq!(bounds.east, 1.0);
        assert_eq!(bounds.west, 0.0);
    }

    #[test]
    fn test_spanning_is_direction_independent() {
        let a = Coordinate::new(3.0, 2.0);
        let b = Coordinate::new(0.0, 0.0);
        assert_eq!(BoundingBox::spanning(a, b), BoundingBox::spanning(b, a));

        let bounds = BoundingBox::spanning(a, b);
        assert_eq!(bounds.north, 3.0);
        assert_eq!(bounds.south, 0.0);
        assert_eq!(bounds.east, 2.0);
        assert_eq!(bounds.west, 0.0);
    }

    #[test]
    fn test_spanning_degenerate() {
        let point = Coordinate::new(4.2, -1.1);
        let bounds = BoundingBox::spanning(point, point);
        assert_eq!(bounds.north, bounds.south);
        assert_eq!(bounds.east, bounds.west);
    }

    #[test]
    fn test_corner_order() {
        let bounds = BoundingBox {
            north: 3.0,
            south: 0.0,
            east: 2.0,
            west: 0.0,
        };
        let corners = bounds.corners();
        assert_eq!(corners[0], Coordinate::new(3.0, 0.0)); // NW
        assert_eq!(corners[1], Coordinate::new(3.0, 2.0)); // NE
        assert_eq!(corners[2], Coordinate::new(0.0, 2.0)); // SE
        assert_eq!(corners[3], Coordinate::new(0.0, 0.0)); // SW
    }

    #[test]
    fn test_corners_enclosed_by_bounds() {
        let bounds = BoundingBox {
            north: 10.0,
            south: -5.0,
            east: 20.0,
            west: -15.0,
        };
        assert_eq!(BoundingBox::of(&bounds.corners()), Some(bounds));
    }

    #[test]
    fn test_center() {
        let bounds = BoundingBox {
            north: 2.0,
            south: 0.0,
            east: 6.0,
            west: 2.0,
        };
        assert_eq!(bounds.center(), Coordinate::new(1.0, 4.0));
    }
}
