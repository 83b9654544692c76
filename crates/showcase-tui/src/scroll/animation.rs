//! L3 Molecular Layer: Page scroll controller
//!
//! Moves the page viewport with eased transitions and refuses to move while
//! the page scroll lock is held by an open modal.

use std::time::{Duration, Instant};

use showcase_core::gallery::ScrollLock;

use super::config::{ScrollConfig, ScrollConfigExt};
use super::{lerp_u16, progress_at, EasingType, EasingTypeExt};

/// One eased move between two rows
#[derive(Debug, Clone, Copy)]
struct Motion {
    start: Instant,
    from: u16,
    to: u16,
    duration: Duration,
    easing: EasingType,
}

impl Motion {
    /// Row at `now`, or None once the move has landed
    fn row_at(&self, now: Instant) -> Option<u16> {
        let t = progress_at(self.start, now, self.duration);
        (t < 1.0).then(|| lerp_u16(self.from, self.to, self.easing.apply(t)))
    }
}

/// Page viewport position with smooth transitions.
///
/// Requests made between frames are queued and folded into a single motion
/// on the next `update()`.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    config: ScrollConfig,
    lock: Option<ScrollLock>,
    position: u16,
    motion: Option<Motion>,
    queued: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            config,
            lock: None,
            position: 0,
            motion: None,
            queued: 0,
        }
    }

    /// Freeze the page whenever `lock` is engaged
    pub fn with_lock(mut self, lock: ScrollLock) -> Self {
        self.lock = Some(lock);
        self
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn is_locked(&self) -> bool {
        self.lock.as_ref().is_some_and(ScrollLock::is_engaged)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    /// True while a frame would change the position
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.motion.is_some() || self.queued != 0
    }

    /// Row the page is heading to
    pub fn target_scroll(&self) -> u16 {
        self.motion.map(|m| m.to).unwrap_or(self.position)
    }

    #[inline]
    pub fn current_scroll(&self) -> u16 {
        self.position
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, scroll: u16) {
        self.cancel();
        self.position = scroll;
    }

    /// Move to an absolute row, animated when smooth scrolling is on
    pub fn scroll_to(&mut self, target: u16, max_scroll: u16, now: Instant) {
        if self.is_locked() {
            return;
        }
        self.queued = 0;
        self.start_motion(target.min(max_scroll), now);
    }

    /// Queue a relative move (positive = down)
    pub fn scroll_by(&mut self, delta: i32, max_scroll: u16) {
        if self.is_locked() {
            return;
        }
        if self.config.is_smooth() {
            self.queued += delta;
        } else {
            self.motion = None;
            self.position = offset(self.position, delta, max_scroll);
        }
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        self.scroll_by(self.step(), max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        self.scroll_by(-self.step(), max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(half_page(viewport_height), max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-half_page(viewport_height), max_scroll);
    }

    /// Advance one frame and return the row to draw from
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.queued != 0 {
            let target = offset(self.target_scroll(), self.queued, max_scroll);
            self.queued = 0;
            self.start_motion(target, now);
        }

        match self.motion.and_then(|m| m.row_at(now)) {
            Some(row) => self.position = row,
            None => {
                if let Some(landed) = self.motion.take() {
                    self.position = landed.to;
                }
            }
        }
        self.position = self.position.min(max_scroll);
        self.position
    }

    /// Stop where the page currently is
    pub fn cancel(&mut self) {
        self.motion = None;
        self.queued = 0;
    }

    fn step(&self) -> i32 {
        self.config.scroll_lines.max(1) as i32
    }

    fn start_motion(&mut self, target: u16, now: Instant) {
        if !self.config.is_smooth() {
            self.motion = None;
            self.position = target;
            return;
        }
        self.motion = (target != self.position).then(|| Motion {
            start: now,
            from: self.position,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }
}

fn offset(row: u16, delta: i32, max_scroll: u16) -> u16 {
    (row as i32 + delta).clamp(0, max_scroll as i32) as u16
}

fn half_page(viewport_height: u16) -> i32 {
    (viewport_height / 2).max(1) as i32
}
