//! L3 Molecular Layer: Reveal engine
//!
//! Owns every registered reveal target and stat counter, grouped by mount
//! scope. Callers report element positions with [`RevealEngine::observe`] and
//! read interpolated states back with [`RevealEngine::sample`]; nothing here
//! touches a rendering surface, and every call takes the current instant.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::counter::{CounterAnimation, CounterSpec};
use super::easing::EasingTypeExt;
use super::spec::{ReplayPolicy, RevealSpec, VisualState};
use super::trigger::{crossings, Bounds, TriggerEvent, Viewport, Zone};
use crate::config::AnimationConfig;
use crate::{Error, Result};

/// Handle of a mounted section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

/// Handle of a registered reveal target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(u64);

/// Handle of a registered counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CounterId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Reverse,
}

/// Timeline playhead: `anchor_pos` at `anchor`, moving in `direction`
#[derive(Debug, Clone, Copy)]
struct Playback {
    anchor: Instant,
    anchor_pos: Duration,
    direction: Direction,
}

impl Playback {
    fn position(&self, now: Instant, total: Duration) -> Duration {
        let elapsed = now.saturating_duration_since(self.anchor);
        match self.direction {
            Direction::Forward => (self.anchor_pos + elapsed).min(total),
            Direction::Reverse => self.anchor_pos.min(total).saturating_sub(elapsed),
        }
    }
}

#[derive(Debug)]
struct Target {
    id: TargetId,
    scope: ScopeId,
    key: String,
    spec: RevealSpec,
    children: usize,
    zone: Zone,
    entered: bool,
    detached: bool,
    playback: Option<Playback>,
}

impl Target {
    fn total(&self) -> Duration {
        self.spec.total_duration(self.children)
    }

    fn position(&self, now: Instant) -> Duration {
        self.playback
            .map(|p| p.position(now, self.total()))
            .unwrap_or_default()
    }

    fn play(&mut self, direction: Direction, now: Instant, instant: bool) {
        let total = self.total();
        let anchor_pos = if instant {
            match direction {
                Direction::Forward => total,
                Direction::Reverse => Duration::ZERO,
            }
        } else {
            self.position(now)
        };
        self.playback = Some(Playback {
            anchor: now,
            anchor_pos,
            direction,
        });
    }

    fn is_animating(&self, now: Instant) -> bool {
        match self.playback {
            Some(p) => {
                let pos = p.position(now, self.total());
                match p.direction {
                    Direction::Forward => pos < self.total(),
                    Direction::Reverse => pos > Duration::ZERO,
                }
            }
            None => false,
        }
    }

    fn sample(&self, child: usize, now: Instant) -> VisualState {
        let pos = self.position(now);
        let delay = self.spec.child_delay(child);
        let duration = self.spec.timing.duration;

        let local = if pos <= delay {
            0.0
        } else if duration.is_zero() {
            1.0
        } else {
            ((pos - delay).as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
        };

        let eased = self.spec.timing.easing.apply(local);
        self.spec.from.lerp(&self.spec.to, eased)
    }
}

#[derive(Debug)]
struct CounterSlot {
    id: CounterId,
    scope: ScopeId,
    target: TargetId,
    counter: CounterAnimation,
}

/// Scroll-reveal orchestration for every mounted section
#[derive(Debug)]
pub struct RevealEngine {
    enabled: bool,
    next_id: u64,
    scopes: HashMap<ScopeId, String>,
    targets: Vec<Target>,
    counters: Vec<CounterSlot>,
}

impl Default for RevealEngine {
    fn default() -> Self {
        Self::new(true)
    }
}

impl RevealEngine {
    /// A disabled engine resolves every transition instantly
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            next_id: 0,
            scopes: HashMap::new(),
            targets: Vec::new(),
            counters: Vec::new(),
        }
    }

    pub fn from_config(config: &AnimationConfig) -> Self {
        Self::new(config.enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Mount a named section. A name can be mounted once until unmounted.
    pub fn mount(&mut self, name: &str) -> Result<ScopeId> {
        if self.scopes.values().any(|n| n == name) {
            return Err(Error::AlreadyMounted(name.to_string()));
        }
        let scope = ScopeId(self.next_id());
        self.scopes.insert(scope, name.to_string());
        tracing::debug!("Reveal scope mounted: {}", name);
        Ok(scope)
    }

    pub fn is_mounted(&self, scope: ScopeId) -> bool {
        self.scopes.contains_key(&scope)
    }

    /// Drop every target and counter of `scope`, cancelling anything in
    /// flight. Returns how many were removed.
    pub fn unmount(&mut self, scope: ScopeId) -> Result<usize> {
        let name = self
            .scopes
            .remove(&scope)
            .ok_or_else(|| Error::UnknownTarget(format!("{:?}", scope)))?;

        let before = self.targets.len() + self.counters.len();
        self.targets.retain(|t| t.scope != scope);
        self.counters.retain(|c| c.scope != scope);
        let removed = before - self.targets.len() - self.counters.len();

        tracing::debug!("Reveal scope unmounted: {} ({} cancelled)", name, removed);
        Ok(removed)
    }

    /// Register a target inside a mounted scope. `key` must be unique in
    /// the scope; `children` is the number of staggered children (1 for a
    /// plain element).
    pub fn register(
        &mut self,
        scope: ScopeId,
        key: &str,
        spec: RevealSpec,
        children: usize,
    ) -> Result<TargetId> {
        let scope_name = self
            .scopes
            .get(&scope)
            .ok_or_else(|| Error::UnknownTarget(format!("{:?}", scope)))?;
        if self.targets.iter().any(|t| t.scope == scope && t.key == key) {
            return Err(Error::AlreadyMounted(format!("{}/{}", scope_name, key)));
        }

        let id = TargetId(self.next_id());
        self.targets.push(Target {
            id,
            scope,
            key: key.to_string(),
            spec,
            children: children.max(1),
            zone: Zone::Before,
            entered: false,
            detached: false,
            playback: None,
        });
        Ok(id)
    }

    fn target(&self, id: TargetId) -> Result<&Target> {
        self.targets
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::UnknownTarget(format!("{:?}", id)))
    }

    fn target_mut(&mut self, id: TargetId) -> Result<&mut Target> {
        self.targets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::UnknownTarget(format!("{:?}", id)))
    }

    /// Attach a counter that starts the first time `target` enters. A target
    /// that already entered shows the final value straight away.
    pub fn attach_counter(&mut self, target: TargetId, spec: CounterSpec) -> Result<CounterId> {
        let scope = self.target(target)?.scope;
        let entered = self.target(target)?.entered;
        let id = CounterId(self.next_id());

        let mut counter = CounterAnimation::new(spec);
        if entered {
            counter.finish();
        }
        self.counters.push(CounterSlot {
            id,
            scope,
            target,
            counter,
        });
        Ok(id)
    }

    /// Report the element's current position. Returns the crossings this
    /// observation produced and applies them:
    /// `Enter` plays forward (and starts attached counters on first entry),
    /// `LeaveBack` rewinds under [`ReplayPolicy::ReverseOnExit`].
    pub fn observe(
        &mut self,
        id: TargetId,
        bounds: Bounds,
        viewport: Viewport,
        now: Instant,
    ) -> Result<Vec<TriggerEvent>> {
        let instant = !self.enabled;
        let target = self.target_mut(id)?;
        if target.detached {
            return Ok(Vec::new());
        }

        let zone = target.spec.trigger.zone(bounds, viewport);
        let events = crossings(target.zone, zone);
        target.zone = zone;

        let mut first_entry = false;
        for event in events {
            match event {
                TriggerEvent::Enter => {
                    first_entry |= !target.entered;
                    target.entered = true;
                    target.play(Direction::Forward, now, instant);
                    if target.spec.replay == ReplayPolicy::Once {
                        target.detached = true;
                    }
                }
                TriggerEvent::LeaveBack if target.spec.replay == ReplayPolicy::ReverseOnExit => {
                    target.play(Direction::Reverse, now, instant);
                }
                _ => {}
            }
            tracing::trace!("Reveal {} -> {:?}", target.key, event);
        }

        if first_entry {
            for slot in self.counters.iter_mut().filter(|c| c.target == id) {
                slot.counter.start(now);
                if instant {
                    slot.counter.finish();
                }
            }
        }

        Ok(events.to_vec())
    }

    /// Advance running counters to `now`
    pub fn tick(&mut self, now: Instant) {
        for slot in &mut self.counters {
            slot.counter.advance_to(now);
        }
    }

    /// Interpolated state of child `child` of `id` at `now`
    pub fn sample(&self, id: TargetId, child: usize, now: Instant) -> Result<VisualState> {
        Ok(self.target(id)?.sample(child, now))
    }

    /// Displayed value of a counter
    pub fn counter_value(&self, id: CounterId) -> Result<u64> {
        self.counters
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.counter.value())
            .ok_or_else(|| Error::UnknownTarget(format!("{:?}", id)))
    }

    /// True while any transition or counter still has frames to produce
    pub fn is_animating(&self, now: Instant) -> bool {
        self.targets.iter().any(|t| t.is_animating(now))
            || self.counters.iter().any(|c| c.counter.is_running())
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    pub fn counter_count(&self) -> usize {
        self.counters.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EasingType;

    const VIEWPORT_HEIGHT: f64 = 1000.0;

    fn viewport(scroll_top: f64) -> Viewport {
        Viewport::new(scroll_top, VIEWPORT_HEIGHT)
    }

    /// Element whose top sits at 1000; enters once scrolled past 200
    fn element() -> Bounds {
        Bounds::new(1000.0, 600.0)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn section_spec() -> RevealSpec {
        RevealSpec::fade_up(100.0, 1000, EasingType::Linear)
    }

    #[test]
    fn test_initial_state_before_trigger() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("projects").unwrap();
        let id = engine.register(scope, "section", section_spec(), 1).unwrap();
        let now = Instant::now();

        let events = engine.observe(id, element(), viewport(0.0), now).unwrap();
        assert!(events.is_empty());
        let state = engine.sample(id, 0, now).unwrap();
        assert_eq!(state, VisualState::hidden(100.0));
    }

    #[test]
    fn test_enter_animates_to_resting() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("projects").unwrap();
        let id = engine.register(scope, "section", section_spec(), 1).unwrap();
        let t0 = Instant::now();

        engine.observe(id, element(), viewport(0.0), t0).unwrap();
        let events = engine.observe(id, element(), viewport(300.0), t0).unwrap();
        assert_eq!(events, [TriggerEvent::Enter]);

        let half = engine.sample(id, 0, t0 + ms(500)).unwrap();
        assert!((half.opacity - 0.5).abs() < 1e-6);
        assert!((half.offset_y - 50.0).abs() < 1e-6);
        assert!(engine.is_animating(t0 + ms(500)));

        let done = engine.sample(id, 0, t0 + ms(1500)).unwrap();
        assert_eq!(done, VisualState::RESTING);
        assert!(!engine.is_animating(t0 + ms(1500)));
    }

    #[test]
    fn test_stagger_offsets_children() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("gallery").unwrap();
        let spec = RevealSpec::fade_up(50.0, 800, EasingType::Linear).with_stagger(100);
        let id = engine.register(scope, "grid", spec, 4).unwrap();
        let t0 = Instant::now();

        engine.observe(id, element(), viewport(300.0), t0).unwrap();

        let at = t0 + ms(400);
        let opacities: Vec<f64> = (0..4)
            .map(|child| engine.sample(id, child, at).unwrap().opacity)
            .collect();
        assert!((opacities[0] - 0.5).abs() < 1e-6);
        assert!((opacities[1] - 0.375).abs() < 1e-6);
        assert!((opacities[3] - 0.125).abs() < 1e-6);

        // The last child finishes at 800 + 3 * 100
        assert!(engine.is_animating(t0 + ms(1050)));
        assert!(!engine.is_animating(t0 + ms(1100)));
    }

    #[test]
    fn test_reverse_on_exit_rewinds_and_replays() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("about").unwrap();
        let id = engine.register(scope, "section", section_spec(), 1).unwrap();
        let t0 = Instant::now();

        engine.observe(id, element(), viewport(300.0), t0).unwrap();
        let t1 = t0 + ms(2000);
        assert_eq!(engine.sample(id, 0, t1).unwrap(), VisualState::RESTING);

        let events = engine.observe(id, element(), viewport(0.0), t1).unwrap();
        assert_eq!(events, [TriggerEvent::LeaveBack]);
        let rewound = engine.sample(id, 0, t1 + ms(1000)).unwrap();
        assert_eq!(rewound, VisualState::hidden(100.0));

        let t2 = t1 + ms(1000);
        let events = engine.observe(id, element(), viewport(300.0), t2).unwrap();
        assert_eq!(events, [TriggerEvent::Enter]);
        assert!(engine.is_animating(t2 + ms(10)));
    }

    #[test]
    fn test_reverse_starts_from_current_position() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("about").unwrap();
        let id = engine.register(scope, "section", section_spec(), 1).unwrap();
        let t0 = Instant::now();

        engine.observe(id, element(), viewport(300.0), t0).unwrap();
        // Leave back halfway through the entrance
        engine.observe(id, element(), viewport(0.0), t0 + ms(500)).unwrap();
        let state = engine.sample(id, 0, t0 + ms(750)).unwrap();
        assert!((state.opacity - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_once_policy_never_reverses() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("hero").unwrap();
        let spec = section_spec().with_replay(ReplayPolicy::Once);
        let id = engine.register(scope, "section", spec, 1).unwrap();
        let t0 = Instant::now();

        engine.observe(id, element(), viewport(300.0), t0).unwrap();
        let events = engine.observe(id, element(), viewport(0.0), t0 + ms(2000)).unwrap();
        assert!(events.is_empty());
        assert_eq!(
            engine.sample(id, 0, t0 + ms(3000)).unwrap(),
            VisualState::RESTING
        );
    }

    #[test]
    fn test_counter_starts_on_first_entry_and_clamps() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("about").unwrap();
        let stats = engine.register(scope, "stats", section_spec(), 1).unwrap();
        let counter = engine
            .attach_counter(stats, CounterSpec::new(150, 60, Duration::from_secs(2)))
            .unwrap();
        let t0 = Instant::now();

        engine.tick(t0 + ms(5000));
        assert_eq!(engine.counter_value(counter).unwrap(), 0);

        engine.observe(stats, element(), viewport(300.0), t0).unwrap();
        engine.tick(t0 + ms(1000));
        assert_eq!(engine.counter_value(counter).unwrap(), 75);
        assert!(engine.is_animating(t0 + ms(1000)));

        engine.tick(t0 + ms(10_000));
        assert_eq!(engine.counter_value(counter).unwrap(), 150);
    }

    #[test]
    fn test_unmount_cancels_everything_in_scope() {
        let mut engine = RevealEngine::default();
        let about = engine.mount("about").unwrap();
        let gallery = engine.mount("gallery").unwrap();
        let stats = engine.register(about, "stats", section_spec(), 1).unwrap();
        engine.register(about, "content", section_spec(), 6).unwrap();
        let grid = engine.register(gallery, "grid", section_spec(), 4).unwrap();
        engine
            .attach_counter(stats, CounterSpec::new(8, 60, Duration::from_secs(2)))
            .unwrap();

        let t0 = Instant::now();
        engine.observe(stats, element(), viewport(300.0), t0).unwrap();
        assert!(engine.is_animating(t0));

        assert_eq!(engine.unmount(about).unwrap(), 3);
        assert_eq!(engine.target_count(), 1);
        assert_eq!(engine.counter_count(), 0);
        assert!(!engine.is_mounted(about));
        assert!(engine.sample(stats, 0, t0).is_err());
        assert!(engine.sample(grid, 0, t0).is_ok());
        assert!(!engine.is_animating(t0 + ms(10)));

        // Unmounting twice is an error, remounting is allowed
        assert!(engine.unmount(about).is_err());
        assert!(engine.mount("about").is_ok());
    }

    #[test]
    fn test_double_mount_and_register_rejected() {
        let mut engine = RevealEngine::default();
        let scope = engine.mount("contact").unwrap();
        assert!(matches!(engine.mount("contact"), Err(Error::AlreadyMounted(_))));

        engine.register(scope, "form", section_spec(), 4).unwrap();
        assert!(matches!(
            engine.register(scope, "form", section_spec(), 4),
            Err(Error::AlreadyMounted(_))
        ));
    }

    #[test]
    fn test_disabled_engine_is_instant() {
        let mut engine = RevealEngine::new(false);
        let scope = engine.mount("about").unwrap();
        let stats = engine.register(scope, "stats", section_spec(), 1).unwrap();
        let counter = engine
            .attach_counter(stats, CounterSpec::new(80, 60, Duration::from_secs(2)))
            .unwrap();
        let t0 = Instant::now();

        engine.observe(stats, element(), viewport(300.0), t0).unwrap();
        assert_eq!(engine.sample(stats, 0, t0).unwrap(), VisualState::RESTING);
        assert_eq!(engine.counter_value(counter).unwrap(), 80);
        assert!(!engine.is_animating(t0));
    }
}
