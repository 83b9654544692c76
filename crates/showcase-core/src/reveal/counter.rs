//! L4 Atomic Layer: Stepped numeric counters
//!
//! A counter climbs from zero to its target in a fixed number of equal steps,
//! one step per tick interval. Step values are computed with integer math so
//! the display can never pass the target; the final step is the target.

use std::time::{Duration, Instant};

use crate::config::CounterConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterSpec {
    pub target: u64,
    pub steps: u32,
    pub interval: Duration,
}

impl CounterSpec {
    /// Reach `target` in `steps` ticks spread over `total`
    pub fn new(target: u64, steps: u32, total: Duration) -> Self {
        let steps = steps.max(1);
        Self {
            target,
            steps,
            interval: total / steps,
        }
    }

    pub fn from_config(target: u64, config: &CounterConfig) -> Self {
        Self::new(
            target,
            config.steps,
            Duration::from_millis(config.duration_ms),
        )
    }
}

/// Counter driven by explicit ticks or by a clock
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    spec: CounterSpec,
    step: u32,
    started_at: Option<Instant>,
}

impl CounterAnimation {
    pub fn new(spec: CounterSpec) -> Self {
        Self {
            spec,
            step: 0,
            started_at: None,
        }
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Begin counting at `now`. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started_at.is_none() {
            self.started_at = Some(now);
        }
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started_at.is_some()
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.step >= self.spec.steps
    }

    /// Started and not yet at the target
    #[inline]
    pub fn is_running(&self) -> bool {
        self.is_started() && !self.is_finished()
    }

    /// Advance one step and return the displayed value
    pub fn step(&mut self) -> u64 {
        if !self.is_finished() {
            self.step += 1;
        }
        self.value()
    }

    /// Catch up with every tick that elapsed by `now`
    pub fn advance_to(&mut self, now: Instant) -> u64 {
        let Some(started_at) = self.started_at else {
            return self.value();
        };
        let elapsed = now.saturating_duration_since(started_at);
        let due = if self.spec.interval.is_zero() {
            self.spec.steps
        } else {
            let ticks = elapsed.as_nanos() / self.spec.interval.as_nanos();
            ticks.min(self.spec.steps as u128) as u32
        };
        self.step = self.step.max(due);
        self.value()
    }

    /// Jump straight to the target
    pub fn finish(&mut self) {
        self.step = self.spec.steps;
    }

    /// Displayed value: `floor(target * step / steps)`, exactly `target` on
    /// the last step
    pub fn value(&self) -> u64 {
        if self.is_finished() {
            return self.spec.target;
        }
        (self.spec.target as u128 * self.step as u128 / self.spec.steps as u128) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_ends_exactly_at_target() {
        for target in [0u64, 1, 7, 8, 12, 80, 150, 999_999] {
            for steps in [1u32, 3, 7, 60] {
                let mut counter =
                    CounterAnimation::new(CounterSpec::new(target, steps, Duration::from_secs(2)));
                let mut last = 0;
                for _ in 0..steps {
                    let value = counter.step();
                    assert!(value <= target, "overshoot {} > {}", value, target);
                    assert!(value >= last, "counter went backwards");
                    last = value;
                }
                assert_eq!(counter.value(), target);
                assert!(counter.is_finished());
                // Extra ticks do nothing
                assert_eq!(counter.step(), target);
            }
        }
    }

    #[test]
    fn test_advance_by_clock() {
        let spec = CounterSpec::new(150, 60, Duration::from_secs(2));
        let mut counter = CounterAnimation::new(spec);
        let start = Instant::now();

        // Not started: stays at zero
        assert_eq!(counter.advance_to(start + Duration::from_secs(5)), 0);

        counter.start(start);
        assert_eq!(counter.advance_to(start + Duration::from_secs(1)), 75);
        assert!(counter.is_running());
        assert_eq!(counter.advance_to(start + Duration::from_secs(3)), 150);
        assert!(!counter.is_running());
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut counter =
            CounterAnimation::new(CounterSpec::new(10, 10, Duration::from_millis(100)));
        let start = Instant::now();
        counter.start(start);
        counter.start(start + Duration::from_secs(10));
        assert_eq!(counter.advance_to(start + Duration::from_millis(50)), 5);
    }

    #[test]
    fn test_from_config() {
        let spec = CounterSpec::from_config(8, &CounterConfig::default());
        assert_eq!(spec.steps, 60);
        assert_eq!(spec.interval, Duration::from_millis(2000) / 60);
    }
}
