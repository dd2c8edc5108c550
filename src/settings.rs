use crate::{error::SettingsError, particle::Particle};

/// Largest capacity whose ring, one spare slot included, fits in an allocation
pub const MAX_CAPACITY: usize = isize::MAX as usize / std::mem::size_of::<Particle>() - 1;

/// Fixed configuration for one particle population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Maximum number of simultaneously active particles
    pub capacity: usize,
    /// Seconds a particle lives before it is retired
    pub max_lifetime: f64,
    /// Launch speed of newly emitted particles
    pub velocity: f64,
    /// Acceleration as a multiple of launch velocity
    pub effect: f64,
    /// Sprite edge length, only read by renderers
    pub sprite_size: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            capacity: 500,
            max_lifetime: 2.0,
            velocity: 100.0,
            effect: -0.75,
            sprite_size: 30.0,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.capacity == 0 {
            return Err(SettingsError::ZeroCapacity);
        }
        if self.capacity > MAX_CAPACITY {
            return Err(SettingsError::CapacityTooLarge(self.capacity));
        }
        if !(self.max_lifetime.is_finite() && self.max_lifetime > 0.0) {
            return Err(SettingsError::InvalidLifetime(self.max_lifetime));
        }
        if !self.velocity.is_finite() {
            return Err(SettingsError::InvalidVelocity(self.velocity));
        }
        if !self.effect.is_finite() {
            return Err(SettingsError::InvalidEffect(self.effect));
        }
        if !(self.sprite_size.is_finite() && self.sprite_size > 0.0) {
            return Err(SettingsError::InvalidSpriteSize(self.sprite_size));
        }

        Ok(())
    }

    /// Particles per second that keep the pool exactly saturated
    pub fn emission_rate(&self) -> f64 {
        self.capacity as f64 / self.max_lifetime
    }
}
