mod projectile;
mod symplectic_euler;

pub use self::projectile::LaunchState;
pub use self::symplectic_euler::SymplecticEulerIntegrator;
