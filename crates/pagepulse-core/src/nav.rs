//! Navigation state: navbar style, active section, anchor jumps, mobile menu

use crate::config::NavConfig;
use crate::page::Page;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavState {
    /// Navbar switched to its compact "scrolled" style
    pub scrolled: bool,
    /// Anchor name of the section currently being read
    pub active_section: Option<String>,
    pub menu_open: bool,
}

#[derive(Debug, Clone)]
pub struct NavTracker {
    config: NavConfig,
    state: NavState,
}

impl NavTracker {
    pub fn new(config: NavConfig) -> Self {
        Self {
            config,
            state: NavState::default(),
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Recompute navbar style and active section for the current scroll offset
    ///
    /// Returns true when anything changed.
    pub fn on_scroll(&mut self, page: &Page) -> bool {
        let scroll_y = page.scroll_y();
        let scrolled = scroll_y > self.config.scrolled_threshold_px;
        let active = page
            .sections()
            .filter(|s| scroll_y >= s.rect.top() - self.config.section_lead_px)
            .last()
            .and_then(|s| s.name.clone());

        let changed = scrolled != self.state.scrolled || active != self.state.active_section;
        if active != self.state.active_section {
            tracing::debug!(section = ?active, "Active section changed");
        }
        self.state.scrolled = scrolled;
        self.state.active_section = active;
        changed
    }

    /// Scroll offset for an in-page link such as `#about`
    ///
    /// The bare `#` link and unknown anchors yield `None`. A resolved anchor
    /// closes the mobile menu.
    pub fn anchor_offset(&mut self, page: &Page, href: &str) -> Option<f64> {
        let name = href.strip_prefix('#').unwrap_or(href);
        if name.is_empty() {
            return None;
        }
        let target = page.find_by_name(name)?;
        let offset = (target.rect.top() - self.config.header_offset_px).clamp(0.0, page.max_scroll());
        self.close_menu();
        Some(offset)
    }

    /// Returns the new open state
    pub fn toggle_menu(&mut self) -> bool {
        self.state.menu_open = !self.state.menu_open;
        self.state.menu_open
    }

    pub fn close_menu(&mut self) {
        self.state.menu_open = false;
    }
}
