//! Startup preloader: simulated load progress with a guaranteed finish

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Time between progress steps
pub const STEP_INTERVAL: Duration = Duration::from_millis(100);
/// Largest single step (exclusive)
pub const MAX_STEP: f64 = 15.0;
/// Progress is forced to 100 after this long
pub const FALLBACK: Duration = Duration::from_secs(5);
/// Length of the exit transition once loading completes
pub const EXIT_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreloaderPhase {
    Loading,
    Exiting { since: Instant },
    Done,
}

/// Progress simulation driven by [`Preloader::tick`]
#[derive(Debug)]
pub struct Preloader {
    progress: f64,
    started_at: Instant,
    steps_taken: u32,
    phase: PreloaderPhase,
    rng: StdRng,
}

impl Preloader {
    pub fn new(now: Instant) -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()), now)
    }

    /// Deterministic progress sequence
    pub fn with_seed(seed: u64, now: Instant) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), now)
    }

    fn with_rng(rng: StdRng, now: Instant) -> Self {
        Self {
            progress: 0.0,
            started_at: now,
            steps_taken: 0,
            phase: PreloaderPhase::Loading,
            rng,
        }
    }

    /// Percentage in [0, 100]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn phase(&self) -> PreloaderPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase != PreloaderPhase::Done
    }

    pub fn stage(&self) -> &'static str {
        match self.progress {
            p if p < 30.0 => "Initializing...",
            p if p < 60.0 => "Loading assets...",
            p if p < 90.0 => "Preparing experience...",
            _ => "Ready!",
        }
    }

    /// Exit transition progress in [0, 1]; 0 while loading
    pub fn exit_progress(&self, now: Instant) -> f64 {
        match self.phase {
            PreloaderPhase::Loading => 0.0,
            PreloaderPhase::Exiting { since } => {
                crate::reveal::timing::progress_at(since, now, EXIT_DURATION)
            }
            PreloaderPhase::Done => 1.0,
        }
    }

    /// Apply every step due by `now`. Returns true when anything changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let elapsed = now.saturating_duration_since(self.started_at);

        match self.phase {
            PreloaderPhase::Loading => {
                let due = (elapsed.as_millis() / STEP_INTERVAL.as_millis()) as u32;
                let before = self.progress;

                while self.steps_taken < due && self.progress < 100.0 {
                    self.steps_taken += 1;
                    let step = self.rng.random_range(0.0..MAX_STEP);
                    self.progress = (self.progress + step).min(100.0);
                }
                if elapsed >= FALLBACK {
                    self.progress = 100.0;
                }

                if self.progress >= 100.0 {
                    tracing::debug!("Preloader complete after {:?}", elapsed);
                    self.phase = PreloaderPhase::Exiting { since: now };
                    return true;
                }
                self.progress != before
            }
            PreloaderPhase::Exiting { since } => {
                if now.saturating_duration_since(since) >= EXIT_DURATION {
                    self.phase = PreloaderPhase::Done;
                    true
                } else {
                    false
                }
            }
            PreloaderPhase::Done => false,
        }
    }

    /// Skip straight past the preloader
    pub fn skip(&mut self) {
        self.progress = 100.0;
        self.phase = PreloaderPhase::Done;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotonic_and_capped() {
        let t0 = Instant::now();
        let mut preloader = Preloader::with_seed(7, t0);
        let mut last = 0.0;

        for i in 1..=40 {
            preloader.tick(t0 + STEP_INTERVAL * i);
            assert!(preloader.progress() >= last);
            assert!(preloader.progress() <= 100.0);
            last = preloader.progress();
        }
    }

    #[test]
    fn test_step_size_bounded() {
        let t0 = Instant::now();
        let mut preloader = Preloader::with_seed(42, t0);
        preloader.tick(t0 + STEP_INTERVAL);
        assert!(preloader.progress() < MAX_STEP);

        // Nothing happens before the first interval elapses
        let mut fresh = Preloader::with_seed(42, t0);
        assert!(!fresh.tick(t0 + Duration::from_millis(99)));
        assert_eq!(fresh.progress(), 0.0);
    }

    #[test]
    fn test_fallback_forces_completion() {
        let t0 = Instant::now();
        let mut preloader = Preloader::with_seed(1, t0);
        preloader.tick(t0 + FALLBACK);
        assert_eq!(preloader.progress(), 100.0);
        assert_eq!(preloader.stage(), "Ready!");
        assert!(matches!(preloader.phase(), PreloaderPhase::Exiting { .. }));
    }

    #[test]
    fn test_exit_then_hidden() {
        let t0 = Instant::now();
        let mut preloader = Preloader::with_seed(3, t0);
        let t1 = t0 + FALLBACK;
        preloader.tick(t1);
        assert!(preloader.is_visible());

        assert!(!preloader.tick(t1 + Duration::from_millis(500)));
        assert!(preloader.exit_progress(t1 + Duration::from_millis(750)) > 0.0);

        assert!(preloader.tick(t1 + EXIT_DURATION));
        assert!(!preloader.is_visible());
        assert_eq!(preloader.exit_progress(t1), 1.0);
    }

    #[test]
    fn test_stage_labels() {
        let t0 = Instant::now();
        let mut preloader = Preloader::with_seed(0, t0);
        assert_eq!(preloader.stage(), "Initializing...");

        preloader.progress = 45.0;
        assert_eq!(preloader.stage(), "Loading assets...");
        preloader.progress = 89.9;
        assert_eq!(preloader.stage(), "Preparing experience...");
        preloader.progress = 90.0;
        assert_eq!(preloader.stage(), "Ready!");
    }

    #[test]
    fn test_skip() {
        let mut preloader = Preloader::new(Instant::now());
        preloader.skip();
        assert!(!preloader.is_visible());
        assert_eq!(preloader.progress(), 100.0);
    }
}
