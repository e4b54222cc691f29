// Animation time + a once-per-second FPS report.

use std::time::{Duration, Instant};

/// Drives the swirl's rotation. Advances by a fixed step per presented frame,
/// not by wall time, so a slow frame never skips part of the animation.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    t: f64,
    step: f64,
    frames: u64,
}

impl AnimationClock {
    pub fn new(step: f64) -> Self {
        Self { t: 0.0, step, frames: 0 }
    }

    /// Advance one frame and return the new time.
    pub fn tick(&mut self) -> f64 {
        self.t += self.step;
        self.frames += 1;
        self.t
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

/// Counts frames and yields an FPS figure once per `interval`.
pub struct FpsMeter {
    interval: Duration,
    window_start: Instant,
    frames: u32,
}

impl FpsMeter {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self { interval, window_start: now, frames: 0 }
    }

    /// Record one frame at `now`. Returns Some(fps) when an interval has elapsed.
    pub fn frame(&mut self, now: Instant) -> Option<f32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }
        let fps = self.frames as f32 / elapsed.as_secs_f32();
        self.frames = 0;
        self.window_start = now;
        Some(fps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_starts_at_zero() {
        let clock = AnimationClock::new(0.01);
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn clock_accumulates_fixed_steps() {
        let mut clock = AnimationClock::new(0.01);
        let mut last = clock.time();
        for _ in 0..1000 {
            let t = clock.tick();
            assert!(t > last);
            last = t;
        }
        assert_eq!(clock.frames(), 1000);
        assert!((clock.time() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn fps_reported_once_per_interval() {
        let start = Instant::now();
        let mut meter = FpsMeter::new(Duration::from_secs(1), start);

        for n in 1..60 {
            assert_eq!(meter.frame(start + Duration::from_millis(n * 16)), None);
        }
        let fps = meter.frame(start + Duration::from_secs(1)).unwrap();
        assert!((fps - 60.0).abs() < 0.01);

        // Window restarts after a report.
        assert_eq!(meter.frame(start + Duration::from_millis(1500)), None);
    }
}
