use std::sync::Arc;
use std::time::{Duration, Instant};

use pagepulse_core::geometry::Viewport;
use pagepulse_core::rate::{Debouncer, Throttle};
use pagepulse_core::session::FrameReport;
use pagepulse_core::{AppConfig, PageSession};

use crate::input::Action;
use crate::scroll::ScrollAnimator;
use crate::theme::Theme;

/// Navigation state is recomputed at most this often while scrolling
const NAV_THROTTLE: Duration = Duration::from_millis(50);
/// Quiet period before a terminal resize is applied to the page
const RESIZE_DEBOUNCE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Help,
}

pub struct App {
    pub config: Arc<AppConfig>,
    pub session: PageSession,
    pub scroll: ScrollAnimator,
    pub theme: Theme,
    pub mode: Mode,
    pub status_message: Option<String>,
    pub should_quit: bool,
    /// First `g` of `gg` seen
    pub pending_g: bool,
    nav_throttle: Throttle,
    resize: Debouncer,
    pending_rows: Option<u16>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, session: PageSession) -> Self {
        Self {
            scroll: ScrollAnimator::new(config.ui.scroll),
            config,
            session,
            theme: Theme::default(),
            mode: Mode::Normal,
            status_message: None,
            should_quit: false,
            pending_g: false,
            nav_throttle: Throttle::new(NAV_THROTTLE),
            resize: Debouncer::new(RESIZE_DEBOUNCE),
            pending_rows: None,
        }
    }

    /// Size the page to the terminal and start the session
    pub fn start(&mut self, rows: u16, now: Instant) {
        self.apply_rows(rows);
        let report = self.session.start(now);
        self.note_report(&report);
    }

    /// Page pixels per terminal row
    pub fn row_height(&self) -> f64 {
        self.config.ui.row_height_px.max(1.0)
    }

    pub fn max_scroll(&self) -> f64 {
        self.session.page().max_scroll()
    }

    pub fn viewport_height(&self) -> f64 {
        self.session.page().viewport().height
    }

    /// Rows available to the page itself (navbar and status bar excluded)
    fn apply_rows(&mut self, rows: u16) {
        let page_rows = rows.saturating_sub(2).max(1);
        let width = self.session.page().viewport().width;
        let height = page_rows as f64 * self.row_height();
        self.session
            .page_mut()
            .set_viewport(Viewport::new(width, height));
        self.scroll.set_scroll(self.session.page().scroll_y());
    }

    pub fn on_resize(&mut self, rows: u16, now: Instant) {
        self.pending_rows = Some(rows);
        self.resize.call(now);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.pending_g = false;
        }
        // A key press dismisses the previous message
        if action != Action::None {
            self.clear_status();
        }

        let max = self.max_scroll();
        let viewport = self.viewport_height();
        match action {
            Action::Quit => self.should_quit = true,
            Action::ScrollDown => self.scroll.scroll_down(max),
            Action::ScrollUp => self.scroll.scroll_up(max),
            Action::ScrollHalfPageDown => self.scroll.scroll_half_page_down(viewport, max),
            Action::ScrollHalfPageUp => self.scroll.scroll_half_page_up(viewport, max),
            Action::JumpToTop => self.scroll.scroll_to(0.0, max, now),
            Action::JumpToBottom => self.scroll.scroll_to(max, max, now),
            Action::PendingG => self.pending_g = true,
            Action::JumpToSection(index) => self.jump_to_section(index, now),
            Action::ToggleMenu => {
                let message = if self.session.toggle_menu() {
                    "Menu opened"
                } else {
                    "Menu closed"
                };
                self.status_message = Some(message.to_string());
            }
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
            }
            Action::ExitMode => self.mode = Mode::Normal,
            Action::None => {}
        }
    }

    /// Names of the page's sections, in order
    pub fn section_names(&self) -> Vec<String> {
        self.session
            .page()
            .sections()
            .filter_map(|s| s.name.clone())
            .collect()
    }

    fn jump_to_section(&mut self, index: usize, now: Instant) {
        let Some(name) = self.section_names().into_iter().nth(index) else {
            return;
        };
        if let Some(offset) = self.session.anchor_offset(&format!("#{}", name)) {
            let max = self.max_scroll();
            self.scroll.scroll_to(offset, max, now);
            self.status_message = Some(format!("Jumped to #{}", name));
        }
    }

    /// Advance one frame: resize, scroll animation, nav, visibility and counters
    pub fn update(&mut self, now: Instant) -> FrameReport {
        if self.resize.poll(now) {
            if let Some(rows) = self.pending_rows.take() {
                self.apply_rows(rows);
            }
        }

        let max = self.max_scroll();
        let offset = self.scroll.update(max, now);
        if (offset - self.session.page().scroll_y()).abs() >= f64::EPSILON {
            self.session.set_scroll(offset);
        }
        if self.nav_throttle.try_acquire(now) {
            self.session.update_nav();
        }

        let report = self.session.frame(now);
        self.note_report(&report);
        report
    }

    fn note_report(&mut self, report: &FrameReport) {
        if let Some(frame) = report.counter_frames.iter().rev().find(|f| f.completed) {
            self.status_message = Some(format!("Counter {} reached {}", frame.element, frame.text));
        }
    }

    /// Whether the loop should poll at animation speed
    pub fn needs_fast_update(&self) -> bool {
        self.scroll.needs_update() || self.session.needs_update() || self.resize.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagepulse_core::page::{Page, COUNTER_CLASS};

    fn app() -> App {
        let config = Arc::new(AppConfig::default());
        let session = PageSession::new(Page::demo().unwrap(), &config);
        App::new(config, session)
    }

    #[test]
    fn test_rows_map_to_viewport() {
        let mut app = app();
        app.start(42, Instant::now());
        // 40 page rows at 20px each
        assert_eq!(app.viewport_height(), 800.0);
    }

    #[test]
    fn test_section_jump_animates_counters() {
        let mut app = app();
        let t0 = Instant::now();
        app.start(42, t0);

        // Sections: home, about, programs, gallery, contact
        app.handle_action(Action::JumpToSection(1), t0);
        assert_eq!(app.scroll.target(), 700.0);

        app.update(t0 + Duration::from_millis(400));
        assert_eq!(app.session.page().scroll_y(), 700.0);
        assert_eq!(app.session.nav().active_section.as_deref(), Some("about"));

        for step in 1..=30u64 {
            app.update(t0 + Duration::from_millis(400 + step * 100));
        }
        let page = app.session.page();
        let texts: Vec<&str> = page
            .with_class(COUNTER_CLASS)
            .into_iter()
            .map(|id| page.get(id).unwrap().text.as_str())
            .collect();
        assert_eq!(texts, vec!["120", "5,000+", "1,500+"]);
        assert!(!app.needs_fast_update());
    }

    #[test]
    fn test_quit_and_help() {
        let mut app = app();
        let now = Instant::now();
        app.handle_action(Action::ToggleHelp, now);
        assert_eq!(app.mode, Mode::Help);
        app.handle_action(Action::ExitMode, now);
        assert_eq!(app.mode, Mode::Normal);
        app.handle_action(Action::Quit, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_message_cleared_by_next_key() {
        let mut app = app();
        let t0 = Instant::now();
        app.start(42, t0);
        app.handle_action(Action::JumpToSection(1), t0);
        app.update(t0 + Duration::from_millis(400));
        app.update(t0 + Duration::from_millis(2500));
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|m| m.starts_with("Counter")));

        app.handle_action(Action::None, t0 + Duration::from_millis(2600));
        assert!(app.status_message.is_some());

        app.handle_action(Action::ScrollDown, t0 + Duration::from_millis(2700));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_resize_is_debounced() {
        let mut app = app();
        let t0 = Instant::now();
        app.start(42, t0);
        app.on_resize(22, t0);
        app.update(t0 + Duration::from_millis(50));
        assert_eq!(app.viewport_height(), 800.0);
        app.update(t0 + Duration::from_millis(150));
        assert_eq!(app.viewport_height(), 400.0);
    }
}
