use thiserror::Error;

/// Rejected simulation settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    #[error("Particle capacity must be at least 1")]
    ZeroCapacity,

    #[error("Particle capacity {0} is too large to allocate")]
    CapacityTooLarge(usize),

    #[error("Max lifetime must be a positive number of seconds, got {0}")]
    InvalidLifetime(f64),

    #[error("Launch velocity must be finite, got {0}")]
    InvalidVelocity(f64),

    #[error("Effect coefficient must be finite, got {0}")]
    InvalidEffect(f64),

    #[error("Sprite size must be positive, got {0}")]
    InvalidSpriteSize(f64),
}
