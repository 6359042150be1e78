//! Newsletter signup button
//!
//! A non-blank address switches the button to its subscribed state and
//! disables it. Once the reset delay passes the button comes back and the
//! input is cleared.

use std::time::{Duration, Instant};

use crate::config::FormConfig;
use crate::rate::Debouncer;

pub const SUBSCRIBED_LABEL: &str = "✓ Subscribed!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewsletterState {
    Ready,
    Subscribed,
}

#[derive(Debug, Clone)]
pub struct Newsletter {
    input: String,
    state: NewsletterState,
    reset: Debouncer,
}

impl Default for Newsletter {
    fn default() -> Self {
        Self::from_config(&FormConfig::default())
    }
}

impl Newsletter {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            input: String::new(),
            state: NewsletterState::Ready,
            reset: Debouncer::new(reset_after),
        }
    }

    pub fn from_config(config: &FormConfig) -> Self {
        Self::new(Duration::from_millis(config.newsletter_reset_ms))
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn state(&self) -> NewsletterState {
        self.state
    }

    /// The button ignores clicks while it shows the subscribed label
    pub fn is_disabled(&self) -> bool {
        self.state == NewsletterState::Subscribed
    }

    /// Label to show, given the button's normal label
    pub fn button_label<'a>(&self, idle_label: &'a str) -> &'a str {
        match self.state {
            NewsletterState::Ready => idle_label,
            NewsletterState::Subscribed => SUBSCRIBED_LABEL,
        }
    }

    /// Handle a click; returns true when the signup was accepted
    pub fn submit(&mut self, now: Instant) -> bool {
        if self.is_disabled() || self.input.trim().is_empty() {
            return false;
        }
        self.state = NewsletterState::Subscribed;
        self.reset.call(now);
        tracing::info!(email = %self.input.trim(), "Newsletter signup accepted");
        true
    }

    /// Restore the button once the reset delay has passed; true on reset
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.reset.poll(now) {
            return false;
        }
        self.state = NewsletterState::Ready;
        self.input.clear();
        true
    }

    pub fn reset_pending(&self) -> bool {
        self.reset.is_pending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut newsletter = Newsletter::default();
        newsletter.set_input("   ");
        assert!(!newsletter.submit(Instant::now()));
        assert_eq!(newsletter.state(), NewsletterState::Ready);
        assert!(!newsletter.reset_pending());
        assert_eq!(newsletter.button_label("Subscribe"), "Subscribe");
    }

    #[test]
    fn test_subscribe_then_reset_after_delay() {
        let mut newsletter = Newsletter::default();
        let t0 = Instant::now();
        newsletter.set_input(" reader@example.org ");

        assert!(newsletter.submit(t0));
        assert!(newsletter.is_disabled());
        assert_eq!(newsletter.button_label("Subscribe"), SUBSCRIBED_LABEL);

        // Clicks while disabled do not push the reset back
        assert!(!newsletter.submit(t0 + ms(1000)));

        assert!(!newsletter.poll(t0 + ms(1999)));
        assert_eq!(newsletter.input(), " reader@example.org ");

        assert!(newsletter.poll(t0 + ms(2000)));
        assert_eq!(newsletter.state(), NewsletterState::Ready);
        assert_eq!(newsletter.input(), "");
        assert_eq!(newsletter.button_label("Subscribe"), "Subscribe");
        assert!(!newsletter.poll(t0 + ms(3000)));
    }

    #[test]
    fn test_reset_delay_from_config() {
        let config = FormConfig {
            newsletter_reset_ms: 500,
            ..Default::default()
        };
        let mut newsletter = Newsletter::from_config(&config);
        let t0 = Instant::now();
        newsletter.set_input("a@b.co");
        newsletter.submit(t0);
        assert!(newsletter.poll(t0 + ms(500)));
    }
}
