//! Frame pacing on a monotonic clock.

use std::time::{Duration, Instant};

use crate::params::Params;

/// Time source for the frame loop
pub trait Clock {
    /// Time since an arbitrary fixed origin; never goes backwards
    fn now(&self) -> Duration;
    fn sleep(&mut self, duration: Duration);
}

/// Real clock backed by [`Instant`] and a thread sleep
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Holds each frame to a minimum length and reports the real elapsed time
pub struct FramePacer<C: Clock> {
    clock: C,
    last: Duration,
    min_frame: Duration,
    max_dt: f32,
}

impl<C: Clock> FramePacer<C> {
    pub fn new(clock: C) -> Self {
        Self::with_limits(
            clock,
            Duration::from_millis(Params::MIN_FRAME_MS),
            Params::MAX_DT,
        )
    }

    pub fn with_limits(clock: C, min_frame: Duration, max_dt: f32) -> Self {
        let last = clock.now();
        Self {
            clock,
            last,
            min_frame,
            max_dt,
        }
    }

    /// Sleep out the rest of the frame, then return the seconds elapsed
    /// since the previous call, capped at `max_dt`.
    pub fn wait(&mut self) -> f32 {
        let target = self.last + self.min_frame;
        let now = self.clock.now();
        if now < target {
            self.clock.sleep(target - now);
        }

        let now = self.clock.now();
        let dt = now.saturating_sub(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Clock that only moves when told to, or when slept on
    struct ManualClock {
        now: Duration,
        slept: Vec<Duration>,
    }

    impl ManualClock {
        fn new() -> Self {
            Self {
                now: Duration::ZERO,
                slept: Vec::new(),
            }
        }
    }

    impl Clock for ManualClock {
        fn now(&self) -> Duration {
            self.now
        }

        fn sleep(&mut self, duration: Duration) {
            self.slept.push(duration);
            self.now += duration;
        }
    }

    #[test]
    fn test_fast_frame_sleeps_to_minimum() {
        let mut pacer = FramePacer::new(ManualClock::new());
        pacer.clock.now += Duration::from_millis(4);

        let dt = pacer.wait();

        assert_eq!(pacer.clock().slept, vec![Duration::from_millis(12)]);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_slow_frame_uses_real_elapsed_time() {
        let mut pacer = FramePacer::new(ManualClock::new());
        pacer.clock.now += Duration::from_millis(30);

        let dt = pacer.wait();

        assert!(pacer.clock().slept.is_empty());
        assert!((dt - 0.030).abs() < 1e-6);
    }

    #[test]
    fn test_very_slow_frame_is_capped() {
        let mut pacer = FramePacer::new(ManualClock::new());
        pacer.clock.now += Duration::from_millis(400);

        assert_eq!(pacer.wait(), 0.05);
    }

    #[test]
    fn test_frames_measured_from_previous_wait() {
        let mut pacer = FramePacer::new(ManualClock::new());
        pacer.wait();
        pacer.clock.now += Duration::from_millis(20);

        let dt = pacer.wait();

        assert!((dt - 0.020).abs() < 1e-6);
        assert_eq!(pacer.clock().now, Duration::from_millis(36));
    }
}
