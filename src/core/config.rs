use crate::error::PhysicsError;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Tuning parameters for the simulation.
///
/// Time is measured in frame units (one unit is one ~60Hz frame), distances in
/// world pixels. The defaults give the ball its "wrecking ball" feel: a heavy
/// ball that blasts light blocks around while barely slowing down.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct SimulationConfig {
    /// Downward acceleration per frame unit squared
    pub gravity: f32,

    /// Largest frame delta a single update may consume
    pub max_frame_delta: f32,

    /// Wall-clock length of one frame unit, in milliseconds
    pub frame_duration_ms: f32,

    /// Mass of the ball
    pub ball_mass: f32,

    /// Restitution of the ball against world edges and blocks
    pub restitution: f32,

    /// Restitution of blocks against the floor and against each other
    pub block_restitution: f32,

    /// Multiplier applied to the ball's horizontal velocity on a floor bounce
    pub floor_rolling_friction: f32,

    /// Coulomb friction coefficient for blocks sliding on the floor
    pub friction_coefficient: f32,

    /// Distance the right wall sits beyond the world width
    pub right_wall_margin: f32,

    /// Vertical speed under which a floor contact becomes a rest
    pub rest_velocity_threshold: f32,

    /// How close to the floor the ball must be to come to rest
    pub rest_distance: f32,

    /// Horizontal speed under which a resting ball stops rolling
    pub rest_horizontal_threshold: f32,

    /// Gap left between the ball and a block after separation
    pub separation_buffer: f32,

    /// Extra gap added to each block when two blocks are pushed apart
    pub block_separation_buffer: f32,

    /// Amplification of a block's upward speed when hit from below
    pub launch_amplification: f32,

    /// Fraction of the ball's horizontal velocity given to a block hit from below
    pub horizontal_knock: f32,

    /// Amplification of a block's horizontal speed when hit from the side
    pub knock_amplification: f32,

    /// Fraction of the ball's speed turned into upward velocity on a side hit
    pub vertical_pop: f32,

    /// Speed under which block-block contact on an axis is treated as resting
    pub block_velocity_threshold: f32,

    /// Restitution of stacked block-block contact on the y axis
    pub block_vertical_restitution: f32,

    /// Restitution of stacked block-block contact on the x axis
    pub block_knock_restitution: f32,

    /// Scale a block's post-hit velocity so ball-block hits never add energy
    pub energy_clamp: bool,

    /// Fraction of the remaining distance the camera covers each frame
    pub camera_lerp: f32,

    /// Cap applied to the drag length when aiming, divided by `LAUNCH_DRAG_SCALE`
    pub max_launch_speed: f32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            max_frame_delta: 2.0,
            frame_duration_ms: 16.67,
            ball_mass: 200.0,
            restitution: 0.6,
            block_restitution: 0.2,
            floor_rolling_friction: 0.98,
            friction_coefficient: 0.02,
            right_wall_margin: 400.0,
            rest_velocity_threshold: 1.0,
            rest_distance: 1.0,
            rest_horizontal_threshold: 0.05,
            separation_buffer: 1.0,
            block_separation_buffer: 0.5,
            launch_amplification: 1.5,
            horizontal_knock: 0.3,
            knock_amplification: 1.5,
            vertical_pop: 0.4,
            block_velocity_threshold: 0.5,
            block_vertical_restitution: 0.5,
            block_knock_restitution: 0.9,
            energy_clamp: false,
            camera_lerp: 0.18,
            max_launch_speed: 60.0,
        }
    }
}

impl SimulationConfig {
    /// Checks that every parameter is inside the range the resolvers assume
    pub fn validate(&self) -> Result<()> {
        let unit_ranged = [
            ("restitution", self.restitution),
            ("block_restitution", self.block_restitution),
            ("floor_rolling_friction", self.floor_rolling_friction),
            ("block_vertical_restitution", self.block_vertical_restitution),
            ("block_knock_restitution", self.block_knock_restitution),
        ];
        for (name, value) in unit_ranged {
            if !(0.0..=1.0).contains(&value) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }

        let positive = [
            ("ball_mass", self.ball_mass),
            ("max_frame_delta", self.max_frame_delta),
            ("frame_duration_ms", self.frame_duration_ms),
            ("max_launch_speed", self.max_launch_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("gravity", self.gravity),
            ("friction_coefficient", self.friction_coefficient),
            ("right_wall_margin", self.right_wall_margin),
            ("rest_velocity_threshold", self.rest_velocity_threshold),
            ("rest_distance", self.rest_distance),
            ("rest_horizontal_threshold", self.rest_horizontal_threshold),
            ("separation_buffer", self.separation_buffer),
            ("block_separation_buffer", self.block_separation_buffer),
            ("launch_amplification", self.launch_amplification),
            ("horizontal_knock", self.horizontal_knock),
            ("knock_amplification", self.knock_amplification),
            ("vertical_pop", self.vertical_pop),
            ("block_velocity_threshold", self.block_velocity_threshold),
        ];
        for (name, value) in non_negative {
            if !(value >= 0.0) {
                return Err(PhysicsError::InvalidParameter(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }

        if !(self.camera_lerp > 0.0 && self.camera_lerp <= 1.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "camera_lerp must be within (0, 1], got {}",
                self.camera_lerp
            )));
        }

        Ok(())
    }
}
