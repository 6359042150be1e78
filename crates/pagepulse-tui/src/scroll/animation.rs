//! Scroll animation controller
//!
//! Positions are page pixels. Time is passed in by the caller so the render
//! loop and the tests agree on what "now" is.

use std::time::{Duration, Instant};

use pagepulse_core::timing::{is_complete_at, lerp, progress_at};

use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::{EasingType, EasingTypeExt};

/// Active scroll animation state
#[derive(Debug, Clone)]
struct ActiveAnimation {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

/// Smooth page scroll controller
///
/// Call `scroll_to()` or `scroll_by()` to request movement, then `update()`
/// every frame to get the current interpolated offset.
#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    animation: Option<ActiveAnimation>,
    config: ScrollConfig,
    current: f64,
    /// Scroll deltas requested since the last frame
    pending_delta: f64,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            animation: None,
            config,
            current: 0.0,
            pending_delta: 0.0,
        }
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Check if there's pending work (animation or pending delta)
    #[inline]
    pub fn needs_update(&self) -> bool {
        self.animation.is_some() || self.pending_delta != 0.0
    }

    /// Final offset once the current animation ends
    pub fn target(&self) -> f64 {
        self.animation
            .as_ref()
            .map(|a| a.to)
            .unwrap_or(self.current)
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, offset: f64) {
        self.animation = None;
        self.current = offset;
        self.pending_delta = 0.0;
    }

    /// Animate to an absolute offset
    pub fn scroll_to(&mut self, target: f64, max_scroll: f64, now: Instant) {
        let target = target.clamp(0.0, max_scroll);

        if !self.config.is_smooth() {
            self.current = target;
            self.animation = None;
            return;
        }

        if (self.current - target).abs() < f64::EPSILON {
            self.animation = None;
            return;
        }

        self.animation = Some(ActiveAnimation {
            start: now,
            from: self.current,
            to: target,
            duration: self.config.animation_duration(),
            easing: self.config.easing,
        });
    }

    /// Scroll by a delta (positive = down)
    ///
    /// Deltas requested within one frame are batched.
    pub fn scroll_by(&mut self, delta: f64, max_scroll: f64) {
        if !self.config.is_smooth() {
            self.current = (self.current + delta).clamp(0.0, max_scroll);
            self.animation = None;
            return;
        }
        self.pending_delta += delta;
    }

    pub fn scroll_down(&mut self, max_scroll: f64) {
        self.scroll_by(self.config.scroll_step_px, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: f64) {
        self.scroll_by(-self.config.scroll_step_px, max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: f64, max_scroll: f64) {
        self.scroll_by(self.config.half_page_px(viewport_height), max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: f64, max_scroll: f64) {
        self.scroll_by(-self.config.half_page_px(viewport_height), max_scroll);
    }

    /// Advance the animation and return the current offset
    pub fn update(&mut self, max_scroll: f64, now: Instant) -> f64 {
        if self.pending_delta != 0.0 {
            let target = (self.target() + self.pending_delta).clamp(0.0, max_scroll);
            self.pending_delta = 0.0;

            if (target - self.current).abs() >= f64::EPSILON {
                self.animation = Some(ActiveAnimation {
                    start: now,
                    from: self.current,
                    to: target,
                    duration: self.config.animation_duration(),
                    easing: self.config.easing,
                });
            }
        }

        if let Some(ref anim) = self.animation {
            if is_complete_at(anim.start, now, anim.duration) {
                self.current = anim.to.min(max_scroll);
                self.animation = None;
            } else {
                let t = progress_at(anim.start, now, anim.duration);
                let eased = anim.easing.apply(t);
                self.current = lerp(anim.from, anim.to, eased).min(max_scroll);
            }
        }

        self.current
    }

    /// Stop at the current offset
    pub fn cancel(&mut self) {
        self.animation = None;
        self.pending_delta = 0.0;
    }
}
