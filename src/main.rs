use clap::Parser;
use heart_particles::{
    cli, emitter::Emitter, follow::FollowInfo, framepace::Framepacer, pool::ParticlePool, render,
};
use log::{debug, info, warn};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // Collect Arguments
    let args = cli::Args::parse();
    let settings = args.settings();

    if args.fixed_step && args.framerate == 0 {
        anyhow::bail!("`--fixed-step` needs a non-zero `--framerate`");
    }

    // State
    let mut pool = ParticlePool::new(&settings)?;
    let mut emitter = Emitter::new(&settings, args.center());
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut framepace = Framepacer::new();

    let frametime = if args.framerate == 0 {
        0.0
    } else {
        1.0 / args.framerate as f64
    };

    info!(
        "Emitting {:.1} particles/s into a pool of {} for {}s",
        emitter.rate,
        pool.capacity(),
        args.seconds
    );

    let mut elapsed = 0.0;
    let mut next_report = 1.0;
    let mut frames = 0u64;
    let mut spawned = 0usize;

    while elapsed < args.seconds {
        let real_delta = framepace.begin_frame();
        let delta_time = if args.fixed_step {
            frametime
        } else {
            real_delta
        };

        spawned += emitter.frame(&mut pool, delta_time, &mut rng);

        log_instances(&pool, settings.sprite_size, frames);

        elapsed += delta_time;
        frames += 1;

        if !args.fixed_step {
            framepace.end_frame(frametime);
        }

        if elapsed >= next_report {
            next_report = next_report_after(elapsed);
            match FollowInfo::gather(&pool) {
                Some(follow) => info!(
                    "t={:.2}s fps={:.1} active={} spawned={} center=({:.1}, {:.1}) extent=({:.1}, {:.1})",
                    elapsed,
                    framepace.framerate(),
                    pool.len(),
                    spawned,
                    follow.center_of_mass.x,
                    follow.center_of_mass.y,
                    follow.size().x,
                    follow.size().y,
                ),
                None => warn!("t={elapsed:.2}s pool is empty"),
            }
        }
    }

    info!(
        "Finished {frames} frames, {spawned} spawned, {} still active",
        pool.len()
    );

    Ok(())
}

/// Upload size of this frame's sprites, only built when debug logging is on
fn log_instances(pool: &ParticlePool, sprite_size: f64, frame: u64) -> Option<usize> {
    if !log::log_enabled!(log::Level::Debug) {
        return None;
    }

    let instances = render::collect_instances(pool, sprite_size);
    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    debug!("Frame {frame}: {} sprites, {} bytes", instances.len(), bytes.len());
    Some(bytes.len())
}

/// Next whole second of simulated time, skipping any seconds a stall jumped over
fn next_report_after(elapsed: f64) -> f64 {
    elapsed.floor() + 1.0
}
