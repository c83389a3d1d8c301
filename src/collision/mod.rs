mod collider_rect;
mod contact;
mod narrow_phase;
mod elastic;
mod boundary;
mod ball_block;
mod block_block;

pub use self::collider_rect::ColliderRect;
pub use self::contact::{ContactSide, SeparationAxis, SideOverlaps};
pub use self::narrow_phase::{aabb_overlap, circle_intersects_aabb};
pub use self::elastic::elastic_1d;
pub use self::boundary::{
    resolve_ball_bounds, resolve_ball_colliders, resolve_block_floor, settle_ball, BounceSurface,
};
pub use self::ball_block::{ball_block_collision, resolve_ball_block};
pub use self::block_block::{block_collision, resolve_block_block};
