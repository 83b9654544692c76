//! L4 Atomic Layer: Time calculation utilities for animations
//!
//! Pure functions for progress and interpolation. Progress takes the current
//! instant explicitly so callers can drive it from a clock of their choosing.

use std::time::{Duration, Instant};

/// Progress (0.0 to 1.0) of an animation at `now`
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Linear interpolation for u16 values (scroll positions)
#[inline]
pub fn lerp_u16(from: u16, to: u16, t: f64) -> u16 {
    lerp(from as f64, to as f64, t).round() as u16
}

/// Stretch or shrink a duration by a speed multiplier (2.0 = twice as long)
#[inline]
pub fn scale_duration(duration: Duration, speed: f64) -> Duration {
    if !speed.is_finite() || speed <= 0.0 {
        return duration;
    }
    Duration::try_from_secs_f64(duration.as_secs_f64() * speed).unwrap_or(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 1.0) - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_lerp_u16() {
        assert_eq!(lerp_u16(0, 100, 0.0), 0);
        assert_eq!(lerp_u16(0, 100, 0.5), 50);
        assert_eq!(lerp_u16(0, 100, 1.0), 100);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress_at(start, start, Duration::ZERO) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_at_explicit_clock() {
        let start = Instant::now();
        let duration = Duration::from_millis(200);
        let quarter = progress_at(start, start + Duration::from_millis(50), duration);
        assert!((quarter - 0.25).abs() < 1e-9);
        let done = progress_at(start, start + Duration::from_secs(1), duration);
        assert!((done - 1.0).abs() < 1e-9);
        // A clock reading before the start counts as zero progress
        assert_eq!(progress_at(start + Duration::from_millis(10), start, duration), 0.0);
    }

    #[test]
    fn test_scale_duration() {
        let d = Duration::from_millis(800);
        assert_eq!(scale_duration(d, 0.5), Duration::from_millis(400));
        assert_eq!(scale_duration(d, 0.0), d);
    }

    #[test]
    fn test_scale_duration_out_of_range_keeps_base() {
        let d = Duration::from_millis(800);
        assert_eq!(scale_duration(d, f64::INFINITY), d);
        assert_eq!(scale_duration(d, f64::NAN), d);
        let longest = Duration::from_secs(u64::MAX);
        assert_eq!(scale_duration(longest, 2.0), longest);
    }
}
