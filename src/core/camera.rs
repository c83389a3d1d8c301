use crate::math::{clamp, lerp};

/// Horizontal camera that eases toward the ball.
///
/// Each frame it covers a fixed fraction of the remaining distance, which
/// approaches the target without overshooting. The eased position is kept
/// unclamped and only the reported position is clamped to `[0, max_x]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFollower {
    position: f32,
    lerp_factor: f32,
    max_x: f32,
}

impl CameraFollower {
    pub fn new(position: f32, lerp_factor: f32, max_x: f32) -> Self {
        Self {
            position,
            lerp_factor,
            max_x,
        }
    }

    /// Eases toward `target_x` and returns the clamped camera position
    pub fn follow(&mut self, target_x: f32) -> f32 {
        self.position = lerp(self.position, target_x, self.lerp_factor);
        self.position()
    }

    /// Current clamped camera position
    pub fn position(&self) -> f32 {
        clamp(self.position, 0.0, self.max_x.max(0.0))
    }

    /// Upper bound of the camera, usually the x of the last section
    pub fn set_max(&mut self, max_x: f32) {
        self.max_x = max_x;
    }

    /// Jumps the camera without easing
    pub fn snap_to(&mut self, x: f32) {
        self.position = x;
    }

    /// Converts a world x coordinate into screen space
    pub fn world_to_screen_x(&self, world_x: f32, viewport_center_x: f32) -> f32 {
        world_x + viewport_center_x - self.position()
    }
}
