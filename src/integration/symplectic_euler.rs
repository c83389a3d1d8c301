use crate::bodies::Body;

/// Semi-implicit Euler stepping for blocks.
///
/// Velocity is updated before position. The vertical and horizontal halves are
/// separate so floor contact (bounce and friction) can run between them.
#[derive(Debug, Default, Clone, Copy)]
pub struct SymplecticEulerIntegrator;

impl SymplecticEulerIntegrator {
    /// Creates a new Symplectic Euler integrator
    pub fn new() -> Self {
        Self
    }

    /// Applies gravity, then moves the body vertically with the new velocity
    #[inline]
    pub fn integrate_vertical(&self, body: &mut Body, gravity: f32, dt: f32) {
        body.velocity.y += gravity * dt;
        body.position.y += body.velocity.y * dt;
    }

    /// Moves the body horizontally with its current velocity
    #[inline]
    pub fn integrate_horizontal(&self, body: &mut Body, dt: f32) {
        body.position.x += body.velocity.x * dt;
    }
}
