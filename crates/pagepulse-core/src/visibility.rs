//! Viewport visibility watcher
//!
//! Elements are registered with a role and checked on every rendering pass.
//! Each (element, role) pair fires at most once: the first time its client
//! rectangle satisfies the configured intersection threshold. Handlers added
//! with [`VisibilityWatcher::subscribe`] run synchronously inside the check
//! pass, in detection order.

use crate::config::VisibilityConfig;
use crate::geometry::intersection_ratio;
use crate::page::{ElementId, Page};

/// What an observed element is watched for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Counter,
    FadeIn,
    LazyImage,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Counter => "counter",
            Role::FadeIn => "fade-in",
            Role::LazyImage => "lazy-image",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObservedElement {
    pub element: ElementId,
    pub role: Role,
    fired: bool,
}

impl ObservedElement {
    pub fn has_fired(&self) -> bool {
        self.fired
    }
}

/// Emitted once per observed element when it first becomes visible
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityEvent {
    pub element: ElementId,
    pub role: Role,
    /// Intersection ratio at the moment of firing
    pub ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatcherState {
    /// Registered but not started
    Idle,
    Observing,
    /// Started on a host without visibility support; never fires
    Unavailable,
}

type Handler = Box<dyn FnMut(&VisibilityEvent)>;

pub struct VisibilityWatcher {
    config: VisibilityConfig,
    observed: Vec<ObservedElement>,
    subscribers: Vec<Handler>,
    state: WatcherState,
}

impl std::fmt::Debug for VisibilityWatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VisibilityWatcher")
            .field("config", &self.config)
            .field("observed", &self.observed)
            .field("subscribers", &self.subscribers.len())
            .field("state", &self.state)
            .finish()
    }
}

impl VisibilityWatcher {
    pub fn new(config: VisibilityConfig) -> Self {
        Self {
            config,
            observed: Vec::new(),
            subscribers: Vec::new(),
            state: WatcherState::Idle,
        }
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    pub fn state(&self) -> WatcherState {
        self.state
    }

    /// Observe `element` for `role`. Registering the same pair twice is a no-op.
    ///
    /// Returns true when the pair was newly added.
    pub fn register(&mut self, element: ElementId, role: Role) -> bool {
        if self
            .observed
            .iter()
            .any(|o| o.element == element && o.role == role)
        {
            return false;
        }
        self.observed.push(ObservedElement {
            element,
            role,
            fired: false,
        });
        true
    }

    /// Add a handler called for every visibility event
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&VisibilityEvent) + 'static,
    {
        self.subscribers.push(Box::new(handler));
    }

    /// Begin observation
    pub fn start(&mut self) {
        if self.state != WatcherState::Idle {
            return;
        }
        if self.config.supported {
            self.state = WatcherState::Observing;
            tracing::debug!(observed = self.observed.len(), "Visibility watcher started");
        } else {
            self.state = WatcherState::Unavailable;
            tracing::warn!(
                observed = self.observed.len(),
                "Visibility detection unavailable, observed elements will stay static"
            );
        }
    }

    pub fn observed(&self) -> &[ObservedElement] {
        &self.observed
    }

    pub fn has_fired(&self, element: ElementId, role: Role) -> bool {
        self.observed
            .iter()
            .any(|o| o.element == element && o.role == role && o.fired)
    }

    /// Number of registered pairs that have not fired yet
    pub fn pending(&self) -> usize {
        self.observed.iter().filter(|o| !o.fired).count()
    }

    /// Run one check pass against the page's current scroll position
    ///
    /// Returns the events fired during this pass after delivering them to
    /// every subscriber.
    pub fn check(&mut self, page: &Page) -> Vec<VisibilityEvent> {
        if self.state != WatcherState::Observing {
            return Vec::new();
        }

        let root = page.viewport().root_rect(self.config.bottom_margin_px);
        let threshold = self.config.visible_fraction;
        let mut events = Vec::new();

        for observed in self.observed.iter_mut().filter(|o| !o.fired) {
            // Elements removed from the page simply never fire
            let Some(rect) = page.bounding_client_rect(observed.element) else {
                continue;
            };
            let ratio = intersection_ratio(&rect, &root);
            if ratio > 0.0 && ratio >= threshold {
                observed.fired = true;
                events.push(VisibilityEvent {
                    element: observed.element,
                    role: observed.role,
                    ratio,
                });
            }
        }

        for event in &events {
            tracing::debug!(
                element = %event.element,
                role = event.role.as_str(),
                ratio = event.ratio,
                "Element became visible"
            );
            for handler in self.subscribers.iter_mut() {
                handler(event);
            }
        }

        events
    }
}
