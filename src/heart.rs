use std::f64::consts::PI;

use rand::Rng;

use crate::vector::Vector2;

/// Point on the heart curve for `t` in `[-π, π]`, y axis pointing up.
pub fn point_on_heart(t: f64) -> Vector2 {
    Vector2::new(
        160.0 * t.sin().powi(3),
        130.0 * t.cos() - 50.0 * (2.0 * t).cos() - 20.0 * (3.0 * t).cos() - 10.0 * (4.0 * t).cos()
            + 25.0,
    )
}

/// Uniformly distributed curve parameter in `(-π, π]`
pub fn sample_parameter<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    PI - 2.0 * PI * rng.gen::<f64>()
}
