use std::time::{Duration, Instant};

/// Wall clock frame timer that can also hold a target frame rate
pub struct Framepacer {
    instants: [Instant; 2],
    current: usize,
}

impl Framepacer {
    pub fn new() -> Self {
        Self {
            instants: [Instant::now(); 2],
            current: 0,
        }
    }

    /// Seconds since the current frame began
    pub fn frametime(&self) -> f64 {
        self.instants[self.current].elapsed().as_secs_f64()
    }

    pub fn framerate(&self) -> f64 {
        1.0 / self.frametime()
    }

    /// Start a new frame and return the seconds since the previous one
    pub fn begin_frame(&mut self) -> f64 {
        let now = Instant::now();
        let previous = self.instants[self.current];

        self.current = self.next();
        self.instants[self.current] = now;

        now.duration_since(previous).as_secs_f64()
    }

    /// Sleep out the remainder of `limit_frametime`, non-positive means unlimited
    pub fn end_frame(&self, limit_frametime: f64) {
        if limit_frametime > f64::EPSILON && limit_frametime.is_finite() {
            const ACCURACY: f64 = 0.0001; // 100 microseconds
            let sleep_time = limit_frametime - self.frametime() - ACCURACY;

            if sleep_time > 0.0 {
                std::thread::sleep(Duration::from_secs_f64(sleep_time));

                while self.frametime() < limit_frametime {
                    std::thread::yield_now();
                }
            }
        }
    }

    fn next(&self) -> usize {
        (self.current + 1) % 2
    }
}

impl Default for Framepacer {
    fn default() -> Self {
        Self::new()
    }
}
