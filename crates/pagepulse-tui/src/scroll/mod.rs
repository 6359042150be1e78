//! Smooth page scrolling for the PagePulse TUI
//!
//! ## Atoms
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `config` - Configuration types (re-exported from pagepulse-core)
//!
//! ## Controller
//! - `animation` - Scroll animator combining easing with core timing helpers
//!
//! # Usage
//!
//! ```ignore
//! use pagepulse_tui::scroll::{ScrollAnimator, ScrollConfig};
//!
//! let mut animator = ScrollAnimator::new(ScrollConfig::default());
//! animator.scroll_to(700.0, max_scroll, Instant::now());
//!
//! // In main loop, update each frame and get current position
//! let scroll = animator.update(max_scroll, Instant::now());
//! ```

pub mod config;
pub mod easing;

pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};
