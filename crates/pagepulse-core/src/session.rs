//! Page session: wires the page model to watchers, counters, effects and nav
//!
//! The host calls [`PageSession::frame`] once per rendering pass. Everything
//! runs synchronously inside that call.

use std::time::Instant;

use crate::config::AppConfig;
use crate::counter::{CounterAnimator, CounterFrame, DURATION_ATTR, TARGET_ATTR};
use crate::effects;
use crate::nav::{NavState, NavTracker};
use crate::page::{Page, COUNTER_CLASS, FADE_IN_CLASS};
use crate::visibility::{Role, VisibilityEvent, VisibilityWatcher};
use crate::Result;

/// What changed during one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub fired: Vec<VisibilityEvent>,
    pub counter_frames: Vec<CounterFrame>,
    pub nav_changed: bool,
}

impl FrameReport {
    pub fn is_empty(&self) -> bool {
        self.fired.is_empty() && self.counter_frames.is_empty() && !self.nav_changed
    }
}

#[derive(Debug)]
pub struct PageSession {
    page: Page,
    watcher: VisibilityWatcher,
    image_watcher: VisibilityWatcher,
    counters: CounterAnimator,
    nav: NavTracker,
    started: bool,
}

impl PageSession {
    pub fn new(page: Page, config: &AppConfig) -> Self {
        Self {
            page,
            watcher: VisibilityWatcher::new(config.visibility),
            image_watcher: VisibilityWatcher::new(config.visibility.immediate()),
            counters: CounterAnimator::new(config.counter),
            nav: NavTracker::new(config.nav),
            started: false,
        }
    }

    /// Page configured in `general.page_path`, or the built-in demo page
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let page = match &config.general.page_path {
            Some(path) => Page::load(path)?,
            None => Page::demo()?,
        };
        Ok(Self::new(page, config))
    }

    /// Register observed elements, start watching and run the first frame
    pub fn start(&mut self, now: Instant) -> FrameReport {
        if self.started {
            return FrameReport::default();
        }
        self.started = true;

        for id in self.page.with_class(COUNTER_CLASS) {
            self.watcher.register(id, Role::Counter);
        }
        for id in self.page.with_class(FADE_IN_CLASS) {
            self.watcher.register(id, Role::FadeIn);
        }
        for id in self.page.lazy_images() {
            self.image_watcher.register(id, Role::LazyImage);
        }

        self.watcher.start();
        self.image_watcher.start();
        tracing::info!(
            title = %self.page.title,
            observed = self.watcher.observed().len(),
            images = self.image_watcher.observed().len(),
            "Page session started"
        );

        let mut report = self.frame(now);
        report.nav_changed |= self.nav.on_scroll(&self.page);
        report
    }

    /// Run one rendering pass
    pub fn frame(&mut self, now: Instant) -> FrameReport {
        let mut report = FrameReport::default();

        // Runs started below already emit their first frame
        let ticked = self.counters.tick(now);
        for frame in &ticked {
            self.write_counter(frame);
        }
        report.counter_frames = ticked;

        let mut fired = self.watcher.check(&self.page);
        fired.extend(self.image_watcher.check(&self.page));

        for event in &fired {
            self.dispatch(event, now, &mut report);
        }
        report.fired = fired;

        report
    }

    fn dispatch(&mut self, event: &VisibilityEvent, now: Instant, report: &mut FrameReport) {
        match event.role {
            Role::Counter => {
                let Some(element) = self.page.get(event.element) else {
                    return;
                };
                let target = element.attribute(TARGET_ATTR).map(str::to_string);
                let duration = element.attribute(DURATION_ATTR).map(str::to_string);
                if let Some(frame) = self.counters.on_visible(
                    event.element,
                    target.as_deref(),
                    duration.as_deref(),
                    now,
                ) {
                    self.write_counter(&frame);
                    report.counter_frames.push(frame);
                }
            }
            Role::FadeIn => effects::reveal(&mut self.page, event.element),
            Role::LazyImage => {
                effects::load_image(&mut self.page, event.element);
            }
        }
    }

    fn write_counter(&mut self, frame: &CounterFrame) {
        if let Some(element) = self.page.get_mut(frame.element) {
            element.text.clone_from(&frame.text);
        }
    }

    /// Scroll the page and refresh navigation state; returns the clamped offset
    pub fn scroll_to(&mut self, y: f64) -> f64 {
        let applied = self.set_scroll(y);
        self.update_nav();
        applied
    }

    /// Move the page without touching navigation state
    pub fn set_scroll(&mut self, y: f64) -> f64 {
        self.page.scroll_to(y)
    }

    /// Recompute navbar style and active section; true when they changed
    pub fn update_nav(&mut self) -> bool {
        self.nav.on_scroll(&self.page)
    }

    /// Scroll target for an in-page link, closing the menu when it resolves
    pub fn anchor_offset(&mut self, href: &str) -> Option<f64> {
        self.nav.anchor_offset(&self.page, href)
    }

    pub fn toggle_menu(&mut self) -> bool {
        self.nav.toggle_menu()
    }

    /// Add a handler for visibility events of the main watcher
    pub fn subscribe<F>(&mut self, handler: F)
    where
        F: FnMut(&VisibilityEvent) + 'static,
    {
        self.watcher.subscribe(handler);
    }

    /// Check if counters still need frames
    pub fn needs_update(&self) -> bool {
        self.counters.is_animating()
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    pub fn counters(&self) -> &CounterAnimator {
        &self.counters
    }

    pub fn watcher(&self) -> &VisibilityWatcher {
        &self.watcher
    }

    pub fn nav(&self) -> &NavState {
        self.nav.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counter::CounterState;
    use crate::effects::LOADED_CLASS;
    use crate::page::ElementId;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    fn counter_ids(session: &PageSession) -> Vec<ElementId> {
        session.page().with_class(COUNTER_CLASS)
    }

    fn text(session: &PageSession, id: ElementId) -> &str {
        &session.page().get(id).unwrap().text
    }

    #[test]
    fn test_counters_stay_static_until_scrolled_into_view() {
        let config = AppConfig::default();
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let t0 = Instant::now();
        session.start(t0);

        for step in 1..=5 {
            let report = session.frame(t0 + ms(step * 500));
            assert!(report.counter_frames.is_empty());
        }
        for id in counter_ids(&session) {
            assert_eq!(text(&session, id), "0");
            assert_eq!(session.counters().state(id), CounterState::Idle);
        }
    }

    #[test]
    fn test_counters_animate_to_targets() {
        let config = AppConfig::default();
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let t0 = Instant::now();
        session.start(t0);

        // Counters sit at 1300..1380; scroll so they are fully inside the trigger region
        session.scroll_to(800.0);
        let report = session.frame(t0);
        assert_eq!(
            report.fired.iter().filter(|e| e.role == Role::Counter).count(),
            3
        );

        session.frame(t0 + ms(1500));
        let ids = counter_ids(&session);
        assert_eq!(text(&session, ids[0]), "90");
        assert_eq!(text(&session, ids[1]), "3,750+");
        // Third counter has a 3000ms data-duration
        assert_eq!(text(&session, ids[2]), "750+");

        session.frame(t0 + ms(3000));
        assert_eq!(text(&session, ids[0]), "120");
        assert_eq!(text(&session, ids[1]), "5,000+");
        assert_eq!(text(&session, ids[2]), "1,500+");
        assert!(!session.needs_update());

        // Scrolling away and back does not restart anything
        session.scroll_to(0.0);
        session.frame(t0 + ms(3100));
        session.scroll_to(800.0);
        let report = session.frame(t0 + ms(3200));
        assert!(report.counter_frames.is_empty());
        assert_eq!(text(&session, ids[1]), "5,000+");
    }

    #[test]
    fn test_each_counter_reported_once_per_frame() {
        let config = AppConfig::default();
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let t0 = Instant::now();
        session.start(t0);

        session.scroll_to(800.0);
        let first = session.frame(t0);
        let texts: Vec<(String, &str)> = first
            .counter_frames
            .iter()
            .map(|f| (f.element.to_string(), f.text.as_str()))
            .collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(
            texts.iter().map(|(_, t)| *t).collect::<Vec<_>>(),
            vec!["0", "0+", "0+"]
        );

        let second = session.frame(t0 + ms(100));
        let mut elements: Vec<ElementId> =
            second.counter_frames.iter().map(|f| f.element).collect();
        assert_eq!(elements.len(), 3);
        elements.dedup();
        assert_eq!(elements.len(), 3);
    }

    #[test]
    fn test_unsupported_environment_is_static() {
        let mut config = AppConfig::default();
        config.visibility.supported = false;
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let t0 = Instant::now();
        session.start(t0);
        session.scroll_to(800.0);
        let report = session.frame(t0 + ms(100));
        assert!(report.fired.is_empty());
        for id in counter_ids(&session) {
            assert_eq!(text(&session, id), "0");
        }
    }

    #[test]
    fn test_fade_in_and_lazy_images() {
        let config = AppConfig::default();
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let t0 = Instant::now();
        session.start(t0);

        let images = session.page().lazy_images();
        assert!(images
            .iter()
            .all(|id| session.page().get(*id).unwrap().src.is_none()));

        session.scroll_to(1700.0);
        session.frame(t0 + ms(16));
        session.scroll_to(2400.0);
        session.frame(t0 + ms(32));
        for id in images {
            let image = session.page().get(id).unwrap();
            assert!(image.src.is_some());
            assert!(image.has_class(LOADED_CLASS));
        }

        let visible_fades = session
            .page()
            .with_class(FADE_IN_CLASS)
            .into_iter()
            .filter(|id| session.page().get(*id).unwrap().opacity == 1.0)
            .count();
        assert_eq!(visible_fades, 3);
    }

    #[test]
    fn test_subscriber_sees_events() {
        let config = AppConfig::default();
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let count = Rc::new(Cell::new(0));
        let seen = Rc::clone(&count);
        session.subscribe(move |_| seen.set(seen.get() + 1));

        session.scroll_to(800.0);
        let t0 = Instant::now();
        let report = session.start(t0);
        assert!(count.get() > 0);
        assert_eq!(count.get(), report.fired.len());
        assert_eq!(session.nav().active_section.as_deref(), Some("about"));
    }

    #[test]
    fn test_anchor_jump() {
        let config = AppConfig::default();
        let mut session = PageSession::new(Page::demo().unwrap(), &config);
        let offset = session.anchor_offset("#programs").unwrap();
        assert_eq!(offset, 1600.0);
        session.scroll_to(offset);
        assert_eq!(session.nav().active_section.as_deref(), Some("programs"));
    }
}
