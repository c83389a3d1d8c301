mod body;
mod body_type;

pub use self::body::{Body, BodyId, BlockDesc, BALL_ID};
pub use self::body_type::{BodyKind, BodyShape};

/// Flags for transient body state
pub mod body_flags {
    use bitflags::bitflags;

    bitflags! {
        /// Per-body state bits maintained by the simulation
        #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
        pub struct BodyFlags: u32 {
            /// A resolver moved this body since its last integration step.
            /// Suppresses floor friction for one block update.
            const JUST_COLLIDED = 0x01;

            /// The ball was launched and has not come to a full rest since
            const LAUNCHED = 0x02;
        }
    }
}

pub use self::body_flags::BodyFlags;
