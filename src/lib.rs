//! Fixed capacity particle simulation emitting along a heart curve.

pub mod cli;
pub mod emitter;
pub mod error;
pub mod follow;
pub mod framepace;
pub mod heart;
pub mod particle;
pub mod pool;
pub mod render;
pub mod settings;
pub mod vector;

pub use error::SettingsError;
pub use particle::Particle;
pub use pool::ParticlePool;
pub use settings::Settings;
pub use vector::Vector2;
