use crate::vector::Vector2;

/// A recyclable pool slot. Re-armed in place by [`Particle::initialize`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vector2,
    pub velocity: Vector2,
    pub acceleration: Vector2,
    /// Seconds since the last `initialize`
    pub age: f64,
}

impl Particle {
    /// Re-arm the slot with fresh kinematic state.
    ///
    /// Acceleration is the launch velocity scaled by `effect`, a negative
    /// `effect` decelerates the particle along its launch direction.
    pub fn initialize(&mut self, x: f64, y: f64, dx: f64, dy: f64, effect: f64) {
        self.position = Vector2::new(x, y);
        self.velocity = Vector2::new(dx, dy);
        self.acceleration = Vector2::new(dx * effect, dy * effect);
        self.age = 0.0;
    }

    /// Explicit Euler step. Position advances with the pre-step velocity.
    pub fn integrate(&mut self, delta_time: f64) {
        self.position += self.velocity * delta_time;
        self.velocity += self.acceleration * delta_time;
        self.age += delta_time;
    }
}
