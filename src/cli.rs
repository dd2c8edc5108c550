use clap::Parser;

use crate::{settings::Settings, vector::Vector2};

/// A heart shaped particle emitter, run headless
#[derive(Parser, Debug)]
#[command()]
pub struct Args {
    /// Maximum number of simultaneously active particles
    #[arg(short, long, default_value_t = 500)]
    pub particles: usize,

    /// Seconds each particle lives
    #[arg(short, long, default_value_t = 2.0)]
    pub lifetime: f64,

    /// Launch speed in pixels per second
    #[arg(long, default_value_t = 100.0)]
    pub velocity: f64,

    /// Acceleration as a multiple of launch velocity
    #[arg(long, default_value_t = -0.75, allow_hyphen_values = true)]
    pub effect: f64,

    /// Sprite edge length in pixels
    #[arg(long, default_value_t = 30.0)]
    pub size: f64,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1920)]
    pub width: u32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 1080)]
    pub height: u32,

    /// The framerate the simulation will run at
    ///
    /// 0 runs as fast as possible
    #[arg(short, long, default_value_t = 60)]
    pub framerate: u32,

    /// Simulated seconds to run for
    #[arg(short, long, default_value_t = 5.0)]
    pub seconds: f64,

    /// Seed for the emission curve sampler
    #[arg(long)]
    pub seed: Option<u64>,

    /// Advance by exactly `1 / framerate` each frame without sleeping
    #[arg(long)]
    pub fixed_step: bool,
}

impl Args {
    pub fn settings(&self) -> Settings {
        Settings {
            capacity: self.particles,
            max_lifetime: self.lifetime,
            velocity: self.velocity,
            effect: self.effect,
            sprite_size: self.size,
        }
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}
