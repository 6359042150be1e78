//! Smooth scrolling settings as the render loop needs them

use std::time::Duration;

pub use pagepulse_core::{EasingType, ScrollConfig};

/// Derived values for ScrollConfig
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Poll interval while a scroll or counter animation is running
    fn animation_tick_duration(&self) -> Duration;

    /// Smooth scrolling needs both the flag and a non-zero duration
    fn is_smooth(&self) -> bool;

    /// Pixels covered by a half-page scroll, never less than one line
    fn half_page_px(&self, viewport_height: f64) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn animation_tick_duration(&self) -> Duration {
        match self.animation_fps {
            0 => Duration::from_millis(16),
            fps => Duration::from_millis((1000 / fps as u64).max(1)),
        }
    }

    #[inline]
    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    fn half_page_px(&self, viewport_height: f64) -> f64 {
        (viewport_height / 2.0).max(self.scroll_step_px)
    }
}
