pub mod world;
pub mod config;
pub mod bounds;
pub mod events;
pub mod clock;
pub mod camera;
pub mod aim;
pub mod feedback;
pub mod layout;
pub mod spawner;

pub use self::world::PhysicsWorld;
pub use self::config::SimulationConfig;
pub use self::bounds::WorldBounds;
pub use self::events::{EventQueue, WorldEvent};
pub use self::clock::{FrameClock, ManualTimeSource, SystemTimeSource, TimeSource};
pub use self::camera::CameraFollower;
pub use self::aim::launch_velocity;
pub use self::feedback::ImpactVolume;
pub use self::layout::{SectionId, WorldLayout};
pub use self::spawner::BlockColumn;
