use crate::math::{Aabb, Vector2};

/// Circle versus box test using the closest point of the box to the circle
/// center. Handles corners exactly, unlike a bounding-box test.
#[inline]
pub fn circle_intersects_aabb(center: Vector2, radius: f32, aabb: &Aabb) -> bool {
    aabb.squared_distance_to_point(center) < radius * radius
}

/// Separating-axis test for two boxes. Touching boxes count as overlapping.
#[inline]
pub fn aabb_overlap(a: &Aabb, b: &Aabb) -> bool {
    a.intersects(b)
}
