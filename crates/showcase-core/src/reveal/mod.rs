//! Scroll-reveal animation engine
//!
//! Sections describe their entrance transitions declaratively and the engine
//! evaluates them against reported element positions and the current time.
//!
//! # Layers
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quartic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `trigger` - Viewport threshold zones and crossing events
//! - `spec` - Reveal descriptions: from/to states, timing, replay policy
//! - `counter` - Stepped numeric counters
//!
//! ## L3 Molecular Layer
//! - `engine` - Scoped registry combining the atoms
//!
//! # Usage
//!
//! ```ignore
//! use showcase_core::reveal::{RevealEngine, RevealSpec, Bounds, Viewport};
//!
//! let mut engine = RevealEngine::default();
//! let scope = engine.mount("gallery")?;
//! let grid = engine.register(
//!     scope,
//!     "grid",
//!     RevealSpec::fade_up(50.0, 800, EasingType::Power3Out).with_stagger(100),
//!     items.len(),
//! )?;
//!
//! // Every frame
//! engine.observe(grid, Bounds::new(top, height), Viewport::new(scroll, rows), now)?;
//! let state = engine.sample(grid, child_index, now)?;
//!
//! // When the section goes away
//! engine.unmount(scope)?;
//! ```

// L4 Atomic Layer
pub mod counter;
pub mod easing;
pub mod spec;
pub mod timing;
pub mod trigger;

// L3 Molecular Layer
pub mod engine;

pub use counter::{CounterAnimation, CounterSpec};
pub use easing::{EasingType, EasingTypeExt};
pub use engine::{CounterId, RevealEngine, ScopeId, TargetId};
pub use spec::{ReplayPolicy, RevealSpec, Timing, VisualState};
pub use trigger::{Bounds, TriggerEvent, TriggerPoints, Viewport, Zone};
