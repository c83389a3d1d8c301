use approx::{assert_abs_diff_eq, assert_relative_eq};
use folio_physics::math::{self, Aabb, Vector2};

#[test]
fn test_vector2_operations() {
    let v1 = Vector2::new(1.0, 2.0);
    let v2 = Vector2::new(4.0, 6.0);

    // Addition
    let sum = v1 + v2;
    assert_eq!(sum, Vector2::new(5.0, 8.0));

    // Subtraction
    let diff = v2 - v1;
    assert_eq!(diff, Vector2::new(3.0, 4.0));

    // Scalar multiplication, both sides
    assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
    assert_eq!(2.0 * v1, Vector2::new(2.0, 4.0));

    // Negation
    assert_eq!(-v1, Vector2::new(-1.0, -2.0));

    // Dot product
    assert_eq!(v1.dot(&v2), 1.0 * 4.0 + 2.0 * 6.0);

    // Length
    assert_relative_eq!(diff.length(), 5.0);
    assert_relative_eq!(diff.length_squared(), 25.0);
    assert_relative_eq!(v1.distance(&v2), 5.0);

    // Normalize
    let normalized = diff.normalize();
    assert_relative_eq!(normalized.length(), 1.0);
    assert_relative_eq!(normalized, Vector2::new(0.6, 0.8), epsilon = 1e-6);

    // Zero vector stays zero
    assert!(Vector2::zero().normalize().is_zero());
}

#[test]
fn test_vector2_assign_ops_and_lerp() {
    let mut v = Vector2::new(1.0, 1.0);
    v += Vector2::new(1.0, 2.0);
    v -= Vector2::new(0.5, 0.5);
    v *= 2.0;
    v /= 4.0;
    assert_relative_eq!(v, Vector2::new(0.75, 1.25));

    let a = Vector2::new(0.0, 10.0);
    let b = Vector2::new(10.0, 20.0);
    assert_relative_eq!(a.lerp(&b, 0.25), Vector2::new(2.5, 12.5));
}

#[test]
fn test_vector2_nalgebra_conversion() {
    let v = Vector2::new(3.5, -2.0);
    let na_v = v.to_nalgebra();
    assert_eq!(na_v.x, 3.5);
    assert_eq!(na_v.y, -2.0);
    assert_relative_eq!(na_v.norm(), v.length());
    assert_eq!(Vector2::from_nalgebra(&na_v), v);

    let array: [f32; 2] = v.into();
    assert_eq!(Vector2::from(array), v);
}

#[test]
fn test_aabb_geometry() {
    let aabb = Aabb::from_center_half_extents(Vector2::new(10.0, 20.0), Vector2::new(5.0, 2.0));
    assert_eq!(aabb.min, Vector2::new(5.0, 18.0));
    assert_eq!(aabb.max, Vector2::new(15.0, 22.0));
    assert_eq!(aabb.left(), 5.0);
    assert_eq!(aabb.bottom(), 22.0);
    assert_relative_eq!(aabb.width(), 10.0);
    assert_relative_eq!(aabb.height(), 4.0);
    assert_eq!(aabb.center(), Vector2::new(10.0, 20.0));

    assert!(aabb.contains_point(Vector2::new(5.0, 18.0)));
    assert!(!aabb.strictly_contains_point(Vector2::new(5.0, 18.0)));
    assert!(aabb.strictly_contains_point(Vector2::new(10.0, 20.0)));
}

#[test]
fn test_aabb_intersection_and_overlap() {
    let a = Aabb::from_edges(0.0, 10.0, 0.0, 10.0);
    let b = Aabb::from_edges(8.0, 20.0, 5.0, 30.0);
    let touching = Aabb::from_edges(10.0, 20.0, 0.0, 10.0);
    let apart = Aabb::from_edges(11.0, 20.0, 0.0, 10.0);

    assert!(a.intersects(&b));
    assert!(a.intersects(&touching));
    assert!(!a.intersects(&apart));

    let overlap = a.overlap_extents(&b);
    assert_relative_eq!(overlap, Vector2::new(2.0, 5.0));
    assert_abs_diff_eq!(a.overlap_extents(&touching).x, 0.0);
    assert!(a.overlap_extents(&apart).x < 0.0);
}

#[test]
fn test_aabb_closest_point() {
    let aabb = Aabb::from_edges(0.0, 10.0, 0.0, 10.0);

    // Inside: the point itself
    assert_eq!(aabb.closest_point(Vector2::new(3.0, 4.0)), Vector2::new(3.0, 4.0));
    assert_eq!(aabb.squared_distance_to_point(Vector2::new(3.0, 4.0)), 0.0);

    // Beside a face
    assert_eq!(aabb.closest_point(Vector2::new(15.0, 5.0)), Vector2::new(10.0, 5.0));

    // Past a corner
    assert_eq!(aabb.closest_point(Vector2::new(13.0, 14.0)), Vector2::new(10.0, 10.0));
    assert_relative_eq!(aabb.distance_to_point(Vector2::new(13.0, 14.0)), 5.0);
}

#[test]
fn test_scalar_helpers() {
    assert_eq!(math::clamp(5.0, 0.0, 3.0), 3.0);
    assert_eq!(math::clamp(-1.0, 0.0, 3.0), 0.0);
    assert_relative_eq!(math::lerp(10.0, 20.0, 0.18), 11.8, epsilon = 1e-5);
    assert!(math::approx_zero(1.0e-8));
}
