//! L4 Atomic Layer: Declarative description of a reveal transition

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::timing::{lerp, scale_duration};
use super::trigger::TriggerPoints;
use crate::config::{AnimationConfig, EasingType};

/// Visual properties a reveal interpolates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    /// Downward displacement in page units
    pub offset_y: f64,
    pub scale: f64,
    pub opacity: f64,
}

impl VisualState {
    /// Fully visible, in place
    pub const RESTING: VisualState = VisualState {
        offset_y: 0.0,
        scale: 1.0,
        opacity: 1.0,
    };

    /// Transparent and pushed down by `offset_y`
    pub fn hidden(offset_y: f64) -> Self {
        Self {
            offset_y,
            scale: 1.0,
            opacity: 0.0,
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn lerp(&self, to: &VisualState, t: f64) -> VisualState {
        VisualState {
            offset_y: lerp(self.offset_y, to.offset_y, t),
            scale: lerp(self.scale, to.scale, t),
            opacity: lerp(self.opacity, to.opacity, t),
        }
    }
}

/// What happens when an element scrolls back out past its entry line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplayPolicy {
    /// Play once; the observer detaches after the first entry
    Once,
    /// Rewind to the initial state so the next entry replays
    #[default]
    ReverseOnExit,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: Duration,
    pub easing: EasingType,
    /// Start offset between consecutive children
    pub stagger: Option<Duration>,
}

/// One `(from, to, timing, trigger, replay)` row of a reveal table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealSpec {
    pub from: VisualState,
    pub to: VisualState,
    pub timing: Timing,
    pub trigger: TriggerPoints,
    pub replay: ReplayPolicy,
}

impl RevealSpec {
    /// Fade in while rising by `offset_y`
    pub fn fade_up(offset_y: f64, duration_ms: u64, easing: EasingType) -> Self {
        Self {
            from: VisualState::hidden(offset_y),
            to: VisualState::RESTING,
            timing: Timing {
                duration: Duration::from_millis(duration_ms),
                easing,
                stagger: None,
            },
            trigger: TriggerPoints::default(),
            replay: ReplayPolicy::default(),
        }
    }

    pub fn with_stagger(mut self, stagger_ms: u64) -> Self {
        self.timing.stagger = Some(Duration::from_millis(stagger_ms));
        self
    }

    pub fn with_initial_scale(mut self, scale: f64) -> Self {
        self.from.scale = scale;
        self
    }

    pub fn with_replay(mut self, replay: ReplayPolicy) -> Self {
        self.replay = replay;
        self
    }

    /// Apply the user's global speed, trigger lines and replay policy
    pub fn configured(mut self, config: &AnimationConfig) -> Self {
        self.timing.duration = scale_duration(self.timing.duration, config.speed);
        self.timing.stagger = self
            .timing
            .stagger
            .map(|stagger| scale_duration(stagger, config.speed));
        self.trigger = TriggerPoints {
            entry: config.entry_fraction,
            exit: config.exit_fraction,
        };
        self.replay = config.replay;
        self
    }

    /// Start offset of child `index`
    #[inline]
    pub fn child_delay(&self, index: usize) -> Duration {
        self.timing
            .stagger
            .map(|stagger| stagger * index as u32)
            .unwrap_or_default()
    }

    /// Timeline length for `children` staggered children
    pub fn total_duration(&self, children: usize) -> Duration {
        self.timing.duration + self.child_delay(children.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_duration_with_stagger() {
        let spec = RevealSpec::fade_up(50.0, 800, EasingType::Power3Out).with_stagger(100);
        assert_eq!(spec.total_duration(1), Duration::from_millis(800));
        assert_eq!(spec.total_duration(4), Duration::from_millis(1100));
        assert_eq!(spec.child_delay(2), Duration::from_millis(200));
    }

    #[test]
    fn test_configured_scales_timing() {
        let config = AnimationConfig {
            speed: 2.0,
            replay: ReplayPolicy::Once,
            ..Default::default()
        };
        let spec = RevealSpec::fade_up(100.0, 1000, EasingType::Power3Out)
            .with_stagger(100)
            .configured(&config);
        assert_eq!(spec.timing.duration, Duration::from_millis(2000));
        assert_eq!(spec.timing.stagger, Some(Duration::from_millis(200)));
        assert_eq!(spec.replay, ReplayPolicy::Once);
    }

    #[test]
    fn test_visual_lerp() {
        let from = VisualState::hidden(100.0).with_scale(0.9);
        let mid = from.lerp(&VisualState::RESTING, 0.5);
        assert!((mid.offset_y - 50.0).abs() < 1e-9);
        assert!((mid.scale - 0.95).abs() < 1e-9);
        assert!((mid.opacity - 0.5).abs() < 1e-9);
    }
}
