use crate::bodies::{body_flags::BodyFlags, BodyKind, BodyShape};
use crate::math::{Aabb, Vector2};
use std::fmt;

/// Identifier of the ball body
pub const BALL_ID: &str = "ball";

/// A stable, caller-visible identifier of a body
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier of the ball
    pub fn ball() -> Self {
        Self(BALL_ID.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BodyId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for BodyId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A simulated entity: the ball or one of the mass blocks.
///
/// The world owns every body and mutates it in place each tick. Callers read
/// positions back after `update`; the fields are not meant to be written from
/// outside the simulation.
#[derive(Debug, Clone)]
pub struct Body {
    pub(crate) id: BodyId,
    pub(crate) shape: BodyShape,
    pub(crate) position: Vector2,
    pub(crate) velocity: Vector2,
    pub(crate) mass: f32,
    pub(crate) label: Option<String>,
    pub(crate) flags: BodyFlags,
}

impl Body {
    /// Creates the ball body at rest
    pub fn new_ball(position: Vector2, radius: f32, mass: f32) -> Self {
        Self {
            id: BodyId::ball(),
            shape: BodyShape::Ball { radius },
            position,
            velocity: Vector2::zero(),
            mass,
            label: None,
            flags: BodyFlags::empty(),
        }
    }

    /// Creates a block body at rest from its description
    pub fn new_block(desc: BlockDesc) -> Self {
        Self {
            id: desc.id,
            shape: BodyShape::Block {
                width: desc.width,
                height: desc.height,
            },
            position: desc.position,
            velocity: Vector2::zero(),
            mass: desc.mass,
            label: desc.label,
            flags: BodyFlags::empty(),
        }
    }

    pub fn get_id(&self) -> &BodyId {
        &self.id
    }

    pub fn get_kind(&self) -> BodyKind {
        self.shape.kind()
    }

    pub fn get_shape(&self) -> BodyShape {
        self.shape
    }

    pub fn get_position(&self) -> Vector2 {
        self.position
    }

    /// Moves a free-standing body. Bodies owned by a world are moved by the world.
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    pub fn get_velocity(&self) -> Vector2 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector2) {
        self.velocity = velocity;
    }

    pub fn get_mass(&self) -> f32 {
        self.mass
    }

    pub fn get_label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn get_flags(&self) -> BodyFlags {
        self.flags
    }

    /// Radius of the ball, `None` for blocks
    pub fn radius(&self) -> Option<f32> {
        match self.shape {
            BodyShape::Ball { radius } => Some(radius),
            BodyShape::Block { .. } => None,
        }
    }

    /// Whether a resolver touched this body since its last integration
    pub fn just_collided(&self) -> bool {
        self.flags.contains(BodyFlags::JUST_COLLIDED)
    }

    /// Bounding box of the body at its current position
    pub fn bounds(&self) -> Aabb {
        self.shape.bounds_at(self.position)
    }

    /// Kinetic energy (1/2 m |v|^2)
    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }

    pub(crate) fn mark_collided(&mut self) {
        self.flags.insert(BodyFlags::JUST_COLLIDED);
    }
}

/// Description of a block to spawn into the world
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDesc {
    pub id: BodyId,
    /// Center of the block
    pub position: Vector2,
    pub width: f32,
    pub height: f32,
    pub mass: f32,
    /// Decorative tag shown by the renderer, no effect on physics
    pub label: Option<String>,
}

impl BlockDesc {
    pub fn new(id: impl Into<BodyId>, position: Vector2, width: f32, height: f32, mass: f32) -> Self {
        Self {
            id: id.into(),
            position,
            width,
            height,
            mass,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}
