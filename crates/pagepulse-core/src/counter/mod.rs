//! Scroll-triggered counters
//!
//! - `target` - Parsing the target value and duration from element attributes
//! - `format` - Rendering a count as grouped digits with the "+" marker
//! - `animator` - The at-most-once animation runner

pub mod animator;
pub mod format;
pub mod target;

pub use animator::{AnimationRun, CounterAnimator, CounterFrame, CounterState};
pub use format::{format_count, group_thousands};
pub use target::{parse_target, CounterTarget, DURATION_ATTR, TARGET_ATTR};
