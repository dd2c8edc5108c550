use glam::DVec2;

use crate::pool::ParticlePool;

/// Aggregate state of the active population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowInfo {
    pub center_of_mass: DVec2,
    pub avg_velocity: DVec2,
    pub min_position: DVec2,
    pub max_position: DVec2,
}

impl FollowInfo {
    /// `None` when no particle is active
    pub fn gather(pool: &ParticlePool) -> Option<Self> {
        let mut count = 0usize;
        let mut position_sum = DVec2::ZERO;
        let mut velocity_sum = DVec2::ZERO;
        let mut min_position = DVec2::splat(f64::INFINITY);
        let mut max_position = DVec2::splat(f64::NEG_INFINITY);

        pool.for_each_active(|p| {
            let position = DVec2::from(p.position);
            count += 1;
            position_sum += position;
            velocity_sum += DVec2::from(p.velocity);
            min_position = min_position.min(position);
            max_position = max_position.max(position);
        });

        if count == 0 {
            return None;
        }

        Some(Self {
            center_of_mass: position_sum / count as f64,
            avg_velocity: velocity_sum / count as f64,
            min_position,
            max_position,
        })
    }

    pub fn size(&self) -> DVec2 {
        (self.max_position - self.min_position).abs()
    }
}
