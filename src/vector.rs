use std::ops::{Add, AddAssign, Mul, Sub};

use glam::DVec2;

/// Two component vector used for particle kinematics.
///
/// Normalising a zero length vector divides by zero; the resulting NaN
/// components are propagated to the caller.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Rescale in place so the magnitude becomes `target`
    pub fn scaled_to(&mut self, target: f64) -> &mut Self {
        self.normalize_in_place();
        self.x *= target;
        self.y *= target;
        self
    }

    pub fn normalize_in_place(&mut self) -> &mut Self {
        let magnitude = self.magnitude();
        self.x /= magnitude;
        self.y /= magnitude;
        self
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Vector2> for DVec2 {
    fn from(v: Vector2) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector2 {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
