use crate::math::Vector2;

/// Closed-form projectile state of the ball.
///
/// The ball is never integrated step by step. Its position is always
/// re-derived from the last launch or bounce point, so the path between two
/// bounces is an exact parabola whatever the frame pacing was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchState {
    /// Where the current parabola starts
    pub origin: Vector2,

    /// Velocity at the origin
    pub velocity: Vector2,

    /// Frame units elapsed since the origin
    pub elapsed: f32,
}

impl LaunchState {
    /// A state resting at `origin`
    pub fn at_rest(origin: Vector2) -> Self {
        Self::new(origin, Vector2::zero())
    }

    /// A fresh parabola from `origin` with `velocity` and no elapsed time
    pub fn new(origin: Vector2, velocity: Vector2) -> Self {
        Self {
            origin,
            velocity,
            elapsed: 0.0,
        }
    }

    /// Advances the clock of the current parabola
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    /// Position on the parabola at the current elapsed time
    #[inline]
    pub fn position(&self, gravity: f32) -> Vector2 {
        let t = self.elapsed;
        Vector2::new(
            self.origin.x + self.velocity.x * t,
            self.origin.y + self.velocity.y * t + 0.5 * gravity * t * t,
        )
    }

    /// Instantaneous velocity at the current elapsed time
    #[inline]
    pub fn velocity_at(&self, gravity: f32) -> Vector2 {
        Vector2::new(self.velocity.x, self.velocity.y + gravity * self.elapsed)
    }

    /// Starts a new parabola from the given point
    #[inline]
    pub fn relaunch(&mut self, origin: Vector2, velocity: Vector2) {
        *self = Self::new(origin, velocity);
    }
}
