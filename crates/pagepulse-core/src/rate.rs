//! Debounce and throttle gates driven by explicit instants

use std::time::{Duration, Instant};

/// Fires once, `wait` after the most recent call
#[derive(Debug, Clone)]
pub struct Debouncer {
    wait: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            deadline: None,
        }
    }

    /// Record a call, pushing the deadline back
    pub fn call(&mut self, now: Instant) {
        self.deadline = Some(now + self.wait);
    }

    /// Returns true exactly once when the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Lets at most one call through per `limit`
#[derive(Debug, Clone)]
pub struct Throttle {
    limit: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(limit: Duration) -> Self {
        Self { limit, last: None }
    }

    pub fn try_acquire(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.saturating_duration_since(last) < self.limit => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debounce_fires_after_quiet_period() {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(100));
        assert!(!debouncer.poll(t0));

        debouncer.call(t0);
        debouncer.call(t0 + Duration::from_millis(60));
        assert!(!debouncer.poll(t0 + Duration::from_millis(120)));
        assert!(debouncer.poll(t0 + Duration::from_millis(160)));
        assert!(!debouncer.poll(t0 + Duration::from_millis(300)));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_throttle_limits_rate() {
        let t0 = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(50));
        assert!(throttle.try_acquire(t0));
        assert!(!throttle.try_acquire(t0 + Duration::from_millis(10)));
        assert!(!throttle.try_acquire(t0 + Duration::from_millis(49)));
        assert!(throttle.try_acquire(t0 + Duration::from_millis(50)));
    }
}
