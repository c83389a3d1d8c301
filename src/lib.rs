//! Physics for a side-scrolling portfolio world: a heavy ball launched along
//! closed-form parabolas, static card hitboxes it bounces off, and light mass
//! blocks it bulldozes through.

pub mod math;
pub mod core;
pub mod bodies;
pub mod collision;
pub mod integration;

/// Re-export common types for easier usage
pub use crate::core::{PhysicsWorld, SimulationConfig, WorldBounds, WorldEvent};
pub use crate::bodies::{Body, BodyId, BodyKind, BodyShape, BlockDesc};
pub use crate::collision::{BounceSurface, ColliderRect, ContactSide};
pub use crate::math::Vector2;

/// Error types for the physics engine
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug, Clone, PartialEq)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Duplicate body id: {0}")]
        DuplicateBody(String),
    }
}

/// Result type for physics engine operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
