//! Per particle sprite parameters for an external renderer.

use crate::{particle::Particle, pool::ParticlePool};

/// One sprite quad, laid out for direct upload into an instance buffer
#[repr(C)]
#[derive(bytemuck::Pod, bytemuck::Zeroable, Clone, Copy, Debug, PartialEq)]
pub struct SpriteInstance {
    /// Sprite center
    pub position: [f32; 2],
    pub size: f32,
    pub alpha: f32,
}

/// Cubic ease-out, grows quickly then settles at 1
fn ease(t: f64) -> f64 {
    let t = t - 1.0;
    t * t * t + 1.0
}

impl SpriteInstance {
    pub fn new(particle: &Particle, max_lifetime: f64, sprite_size: f64) -> Self {
        let t = particle.age / max_lifetime;

        Self {
            position: [particle.position.x as f32, particle.position.y as f32],
            size: (sprite_size * ease(t)) as f32,
            alpha: (1.0 - t) as f32,
        }
    }
}

/// Sprite instances for every active particle, oldest first
pub fn collect_instances(pool: &ParticlePool, sprite_size: f64) -> Vec<SpriteInstance> {
    let max_lifetime = pool.max_lifetime();
    let mut instances = Vec::with_capacity(pool.len());
    pool.for_each_active(|p| instances.push(SpriteInstance::new(p, max_lifetime, sprite_size)));
    instances
}
