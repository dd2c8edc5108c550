use log::warn;
use rand::Rng;

use crate::{heart, pool::ParticlePool, settings::Settings, vector::Vector2};

/// Spawns particles along the heart curve at a steady rate.
///
/// Fractional spawns carry over between frames, so over time the emitted
/// count tracks `rate * elapsed`.
pub struct Emitter {
    pub rate: f64,
    pub velocity: f64,
    /// Canvas position of the curve origin, y axis pointing down
    pub center: Vector2,

    budget: f64,
}

impl Emitter {
    pub fn new(settings: &Settings, center: Vector2) -> Self {
        Self {
            rate: settings.emission_rate(),
            velocity: settings.velocity,
            center,

            budget: 0.0,
        }
    }

    /// Pending fractional spawn
    pub fn budget(&self) -> f64 {
        self.budget
    }

    /// Spawn this frame's share of particles. Returns how many were spawned.
    pub fn emit<R: Rng + ?Sized>(
        &mut self,
        pool: &mut ParticlePool,
        delta_time: f64,
        rng: &mut R,
    ) -> usize {
        let delta_time = if delta_time.is_finite() {
            delta_time.max(0.0)
        } else {
            0.0
        };

        self.budget += self.rate * delta_time;
        let amount = self.budget.floor();
        self.budget -= amount;

        let amount = amount as usize;
        for _ in 0..amount {
            let position = heart::point_on_heart(heart::sample_parameter(rng));
            let mut direction = position;
            direction.scaled_to(self.velocity);

            if !direction.is_finite() {
                warn!("Curve point {position:?} has no direction, spawning with NaN velocity");
            }

            pool.spawn(
                self.center.x + position.x,
                self.center.y - position.y,
                direction.x,
                -direction.y,
            );
        }

        amount
    }

    /// One animation frame: spawn first, then advance the pool.
    pub fn frame<R: Rng + ?Sized>(
        &mut self,
        pool: &mut ParticlePool,
        delta_time: f64,
        rng: &mut R,
    ) -> usize {
        let spawned = self.emit(pool, delta_time, rng);
        pool.step(delta_time);
        spawned
    }
}
