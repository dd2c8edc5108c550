//! Fixed capacity ring buffer of particles.
//!
//! Active particles occupy the circular range `[first_active, first_free)`.
//! `first_active == first_free` always means empty, so a spawn that would
//! make the indices meet evicts the oldest particle instead. The ring keeps
//! one slot more than the configured capacity, which lets `capacity`
//! particles be active at once under that rule.

use log::debug;

use crate::{error::SettingsError, particle::Particle, settings::Settings};

pub struct ParticlePool {
    particles: Vec<Particle>,
    first_active: usize,
    first_free: usize,

    max_lifetime: f64,
    effect: f64,
}

impl ParticlePool {
    pub fn new(settings: &Settings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let slots = settings.capacity + 1;
        debug!(
            "Particle pool: {{ capacity: {}, max_lifetime: {}s, effect: {} }}",
            settings.capacity, settings.max_lifetime, settings.effect
        );

        Ok(Self {
            particles: vec![Particle::default(); slots],
            first_active: 0,
            first_free: 0,

            max_lifetime: settings.max_lifetime,
            effect: settings.effect,
        })
    }

    /// Maximum number of simultaneously active particles
    pub fn capacity(&self) -> usize {
        self.particles.len() - 1
    }

    pub fn max_lifetime(&self) -> f64 {
        self.max_lifetime
    }

    pub fn len(&self) -> usize {
        let slots = self.particles.len();
        (self.first_free + slots - self.first_active) % slots
    }

    pub fn is_empty(&self) -> bool {
        self.first_active == self.first_free
    }

    /// Ring indices as `(first_active, first_free)`
    pub fn indices(&self) -> (usize, usize) {
        (self.first_active, self.first_free)
    }

    /// Activate the next free slot. When the pool is full the oldest active
    /// particle is evicted; spawning never fails.
    pub fn spawn(&mut self, x: f64, y: f64, dx: f64, dy: f64) {
        self.particles[self.first_free].initialize(x, y, dx, dy, self.effect);

        self.first_free = self.next(self.first_free);
        if self.first_active == self.first_free {
            self.first_active = self.next(self.first_active);
        }
    }

    /// Integrate every active particle, then retire expired ones from the
    /// front of the range.
    pub fn step(&mut self, delta_time: f64) {
        let (front, back) = self.active_slices_mut();
        for particle in front.iter_mut().chain(back.iter_mut()) {
            particle.integrate(delta_time);
        }

        // Ages are non-increasing from front to back, so expiry is FIFO
        while self.first_active != self.first_free
            && self.particles[self.first_active].age >= self.max_lifetime
        {
            self.first_active = self.next(self.first_active);
        }
    }

    /// Active particles in spawn order, split where the range wraps.
    pub fn active_slices(&self) -> (&[Particle], &[Particle]) {
        if self.first_active <= self.first_free {
            (&self.particles[self.first_active..self.first_free], &[])
        } else {
            let (head, tail) = self.particles.split_at(self.first_active);
            (tail, &head[..self.first_free])
        }
    }

    fn active_slices_mut(&mut self) -> (&mut [Particle], &mut [Particle]) {
        if self.first_active <= self.first_free {
            (
                &mut self.particles[self.first_active..self.first_free],
                Default::default(),
            )
        } else {
            let (head, tail) = self.particles.split_at_mut(self.first_active);
            (tail, &mut head[..self.first_free])
        }
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Particle> + '_ {
        let (front, back) = self.active_slices();
        front.iter().chain(back.iter())
    }

    pub fn for_each_active<F: FnMut(&Particle)>(&self, visit: F) {
        self.iter_active().for_each(visit);
    }

    fn next(&self, index: usize) -> usize {
        (index + 1) % self.particles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Vector2;

    fn pool(capacity: usize, max_lifetime: f64) -> ParticlePool {
        ParticlePool::new(&Settings {
            capacity,
            max_lifetime,
            ..Default::default()
        })
        .unwrap()
    }

    /// Particles are tagged by their spawn x coordinate
    fn tags(pool: &ParticlePool) -> Vec<f64> {
        let mut tags = Vec::new();
        pool.for_each_active(|p| tags.push(p.position.x));
        tags
    }

    #[test]
    fn new_pool_is_empty() {
        let pool = pool(8, 1.0);
        assert!(pool.is_empty());
        assert_eq!(pool.len(), 0);
        assert_eq!(pool.capacity(), 8);
        assert_eq!(pool.iter_active().count(), 0);
    }

    #[test]
    fn rejects_invalid_settings() {
        let zero = Settings {
            capacity: 0,
            ..Default::default()
        };
        assert_eq!(ParticlePool::new(&zero).err(), Some(SettingsError::ZeroCapacity));

        let negative = Settings {
            max_lifetime: -2.0,
            ..Default::default()
        };
        assert!(matches!(
            ParticlePool::new(&negative),
            Err(SettingsError::InvalidLifetime(_))
        ));

        let huge = Settings {
            capacity: usize::MAX,
            ..Default::default()
        };
        assert_eq!(
            ParticlePool::new(&huge).err(),
            Some(SettingsError::CapacityTooLarge(usize::MAX))
        );
    }

    #[test]
    fn single_spawn() {
        let mut pool = pool(4, 1.0);
        pool.spawn(1.0, 2.0, 10.0, 0.0);

        let active: Vec<_> = pool.iter_active().copied().collect();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].position, Vector2::new(1.0, 2.0));
        assert_eq!(active[0].velocity, Vector2::new(10.0, 0.0));
        assert_eq!(active[0].acceleration, Vector2::new(-7.5, 0.0));
        assert_eq!(active[0].age, 0.0);
    }

    #[test]
    fn overflow_evicts_oldest() {
        let mut pool = pool(4, 1.0);
        for i in 1..=5 {
            pool.spawn(i as f64, 0.0, i as f64, 0.0);
            assert!(pool.len() <= 4);
        }

        assert_eq!(pool.len(), 4);
        assert_eq!(tags(&pool), vec![2.0, 3.0, 4.0, 5.0]);

        pool.step(1.5);
        assert!(pool.is_empty());
        let (first_active, first_free) = pool.indices();
        assert_eq!(first_active, first_free);
    }

    #[test]
    fn full_pool_keeps_evicting_in_spawn_order() {
        let mut pool = pool(3, 10.0);
        for i in 1..=20 {
            pool.spawn(i as f64, 0.0, 0.0, 0.0);
        }
        assert_eq!(tags(&pool), vec![18.0, 19.0, 20.0]);
    }

    #[test]
    fn capacity_of_one() {
        let mut pool = pool(1, 1.0);
        pool.spawn(1.0, 0.0, 0.0, 0.0);
        assert_eq!(tags(&pool), vec![1.0]);
        pool.spawn(2.0, 0.0, 0.0, 0.0);
        assert_eq!(tags(&pool), vec![2.0]);
    }

    #[test]
    fn zero_step_changes_nothing() {
        let mut pool = pool(4, 1.0);
        pool.spawn(0.0, 0.0, 3.0, 4.0);
        pool.spawn(1.0, 1.0, -3.0, 2.0);
        pool.step(0.25);

        let before: Vec<_> = pool.iter_active().copied().collect();
        pool.step(0.0);
        let after: Vec<_> = pool.iter_active().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn retires_on_reaching_lifetime() {
        let mut pool = pool(4, 1.0);
        pool.spawn(0.0, 0.0, 1.0, 0.0);

        pool.step(0.5);
        assert_eq!(pool.len(), 1);
        pool.step(0.25);
        assert_eq!(pool.len(), 1);
        pool.step(0.25);
        assert!(pool.is_empty());
    }

    #[test]
    fn retirement_is_fifo() {
        let mut pool = pool(8, 1.0);
        pool.spawn(1.0, 0.0, 0.0, 0.0);
        pool.step(0.5);
        pool.spawn(2.0, 0.0, 0.0, 0.0);
        pool.step(0.25);
        pool.spawn(3.0, 0.0, 0.0, 0.0);

        pool.step(0.25);
        assert_eq!(tags(&pool), vec![2.0, 3.0]);
        pool.step(0.5);
        assert_eq!(tags(&pool), vec![3.0]);
        pool.step(0.5);
        assert!(pool.is_empty());
    }

    #[test]
    fn steps_across_wrapped_range() {
        let mut pool = pool(3, 1.0);
        for i in 1..=3 {
            pool.spawn(i as f64, 0.0, 1.0, 0.0);
        }
        pool.step(0.6);
        pool.spawn(4.0, 0.0, 1.0, 0.0);
        pool.spawn(5.0, 0.0, 1.0, 0.0);

        let (first_active, first_free) = pool.indices();
        assert!(first_free < first_active);
        let (front, back) = pool.active_slices();
        assert_eq!((front.len(), back.len()), (2, 1));

        pool.step(0.5);
        let ages: Vec<_> = pool.iter_active().map(|p| p.age).collect();
        assert_eq!(ages, vec![0.5, 0.5]);
        assert_eq!(tags(&pool), vec![4.5, 5.5]);
    }

    #[test]
    fn integration_is_deterministic() {
        let run = || {
            let mut pool = pool(16, 2.0);
            for (i, dt) in [0.016, 0.033, 0.0, 0.1, 0.016].into_iter().enumerate() {
                pool.spawn(i as f64, -(i as f64), 10.0 * i as f64, 3.0);
                pool.step(dt);
            }
            pool.iter_active().copied().collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
