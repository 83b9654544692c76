//! Smooth page scrolling for the Showcase TUI
//!
//! This module implements nvim-like smooth scrolling with configurable easing
//! functions and animation parameters. Easing and timing atoms are shared
//! with the reveal engine in showcase-core.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (re-exported from showcase-core)
//! - `timing` - Time calculation utilities (re-exported from showcase-core)
//! - `config` - Configuration types and defaults (re-exported from showcase-core)
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use showcase_tui::scroll::{ScrollAnimator, ScrollConfig};
//!
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//!
//! // Start a scroll animation
//! animator.scroll_by(10, max_scroll);
//!
//! // In main loop, update each frame and get current position
//! let scroll = animator.update(max_scroll, Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;
pub use showcase_core::reveal::easing::{EasingType, EasingTypeExt};
pub use showcase_core::reveal::timing::{lerp_u16, progress_at};

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
