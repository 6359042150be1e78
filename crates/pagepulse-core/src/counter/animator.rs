//! Counter animation runner
//!
//! Each counter moves through `Idle -> Running -> Completed`. The animated set
//! is written before a run starts, so a second `on_visible` for the same
//! element is a no-op even while the first run is still in flight.

use std::collections::{BTreeMap, HashSet};
use std::time::{Duration, Instant};

use crate::config::CounterConfig;
use crate::page::ElementId;
use crate::timing::progress_at;

use super::format::format_count;
use super::target::CounterTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterState {
    Idle,
    Running,
    Completed,
}

/// In-flight animation for one counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationRun {
    pub start: Instant,
    pub target: CounterTarget,
}

impl AnimationRun {
    pub fn progress(&self, now: Instant) -> f64 {
        progress_at(self.start, now, self.target.duration)
    }

    /// Value shown at `now`: floor(progress * target)
    pub fn displayed(&self, now: Instant) -> u64 {
        (self.progress(now) * self.target.value as f64).floor() as u64
    }
}

/// Text to write into a counter element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterFrame {
    pub element: ElementId,
    pub value: u64,
    pub text: String,
    /// Last frame of the run
    pub completed: bool,
}

#[derive(Debug, Clone)]
pub struct CounterAnimator {
    config: CounterConfig,
    animated: HashSet<ElementId>,
    runs: BTreeMap<ElementId, AnimationRun>,
}

impl Default for CounterAnimator {
    fn default() -> Self {
        Self::new(CounterConfig::default())
    }
}

impl CounterAnimator {
    pub fn new(config: CounterConfig) -> Self {
        Self {
            config,
            animated: HashSet::new(),
            runs: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &CounterConfig {
        &self.config
    }

    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.config.duration_ms)
    }

    /// Start animating a counter that just became visible
    ///
    /// `target` and `duration` are the raw `data-target` and `data-duration`
    /// attribute values. Returns the first frame, or `None` when this element
    /// has already been animated.
    pub fn on_visible(
        &mut self,
        element: ElementId,
        target: Option<&str>,
        duration: Option<&str>,
        now: Instant,
    ) -> Option<CounterFrame> {
        if !self.animated.insert(element) {
            return None;
        }

        let target = CounterTarget::from_attributes(target, duration, self.default_duration());
        let run = AnimationRun { start: now, target };
        tracing::debug!(
            element = %element,
            target = target.value,
            duration_ms = target.duration.as_millis() as u64,
            "Counter animation started"
        );

        let frame = self.frame_for(element, &run, now);
        if !frame.completed {
            self.runs.insert(element, run);
        }
        Some(frame)
    }

    /// Advance every running counter to `now`
    ///
    /// Frames come out in element order. Completed runs emit their final
    /// frame once and are dropped.
    pub fn tick(&mut self, now: Instant) -> Vec<CounterFrame> {
        let frames: Vec<CounterFrame> = self
            .runs
            .iter()
            .map(|(element, run)| self.frame_for(*element, run, now))
            .collect();

        for frame in frames.iter().filter(|f| f.completed) {
            self.runs.remove(&frame.element);
        }

        frames
    }

    fn frame_for(&self, element: ElementId, run: &AnimationRun, now: Instant) -> CounterFrame {
        let target = run.target.value;
        let progress = run.progress(now);

        // A zero target has nothing to count through
        if progress >= 1.0 || target == 0 {
            tracing::debug!(element = %element, target, "Counter animation completed");
            CounterFrame {
                element,
                value: target,
                text: format_count(target, target, self.config.plus_threshold),
                completed: true,
            }
        } else {
            let value = run.displayed(now);
            CounterFrame {
                element,
                value,
                text: format_count(value, target, self.config.plus_threshold),
                completed: false,
            }
        }
    }

    pub fn state(&self, element: ElementId) -> CounterState {
        if self.runs.contains_key(&element) {
            CounterState::Running
        } else if self.animated.contains(&element) {
            CounterState::Completed
        } else {
            CounterState::Idle
        }
    }

    pub fn run(&self, element: ElementId) -> Option<&AnimationRun> {
        self.runs.get(&element)
    }

    /// Check if any counter still needs frames
    #[inline]
    pub fn is_animating(&self) -> bool {
        !self.runs.is_empty()
    }

    pub fn running(&self) -> usize {
        self.runs.len()
    }
}
