use crate::math::Vector2;

/// The drag length is divided by this to get a launch velocity
pub const LAUNCH_DRAG_SCALE: f32 = 5.0;

/// Drag-to-launch: the ball flies opposite to the drag direction.
///
/// `drag_start` is where the pointer grabbed the ball and `release` where it
/// let go, both in screen coordinates. The drag length is capped at
/// `max_launch_speed * 10` before scaling down, so the launch speed never
/// exceeds `max_launch_speed * 2`.
pub fn launch_velocity(drag_start: Vector2, release: Vector2, max_launch_speed: f32) -> Vector2 {
    let drag = drag_start - release;
    let magnitude = drag.length().min(max_launch_speed * 10.0);
    let theta = drag.angle();

    Vector2::new(theta.cos(), theta.sin()) * (magnitude / LAUNCH_DRAG_SCALE)
}
