use crate::math::Vector2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Axis-Aligned Bounding Box in world space.
///
/// `min` is the top-left corner and `max` the bottom-right one, since y grows
/// downward in the world.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Top-left corner of the AABB
    pub min: Vector2,

    /// Bottom-right corner of the AABB
    pub max: Vector2,
}

impl Aabb {
    /// Creates a new AABB from minimum and maximum points
    #[inline]
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    /// Creates an AABB centered at a position with the given half extents
    #[inline]
    pub fn from_center_half_extents(center: Vector2, half_extents: Vector2) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Creates an AABB from its four edges
    #[inline]
    pub fn from_edges(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            min: Vector2::new(left, top),
            max: Vector2::new(right, bottom),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Returns the center of the AABB
    #[inline]
    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Checks if this AABB contains a point (edges included)
    #[inline]
    pub fn contains_point(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Checks if a point lies in the interior of the AABB (edges excluded)
    #[inline]
    pub fn strictly_contains_point(&self, point: Vector2) -> bool {
        point.x > self.min.x
            && point.x < self.max.x
            && point.y > self.min.y
            && point.y < self.max.y
    }

    /// Checks if this AABB intersects with another AABB. Touching edges count.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// Penetration depth on each axis. A component is negative when the boxes
    /// are separated along that axis and zero when they only touch.
    #[inline]
    pub fn overlap_extents(&self, other: &Self) -> Vector2 {
        Vector2::new(
            self.max.x.min(other.max.x) - self.min.x.max(other.min.x),
            self.max.y.min(other.max.y) - self.min.y.max(other.min.y),
        )
    }

    /// Returns the closest point on the AABB to a given point
    #[inline]
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        Vector2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Returns the squared distance from a point to the AABB
    #[inline]
    pub fn squared_distance_to_point(&self, point: Vector2) -> f32 {
        let closest = self.closest_point(point);
        (closest - point).length_squared()
    }

    /// Returns the distance from a point to the AABB
    #[inline]
    pub fn distance_to_point(&self, point: Vector2) -> f32 {
        self.squared_distance_to_point(point).sqrt()
    }
}
