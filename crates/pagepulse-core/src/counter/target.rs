//! Counter targets
//!
//! A bad `data-target` never fails: it is logged and treated as zero.

use std::time::Duration;

/// Attribute holding the final counter value
pub const TARGET_ATTR: &str = "data-target";
/// Optional per-element duration override in milliseconds
pub const DURATION_ATTR: &str = "data-duration";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub duration: Duration,
}

impl CounterTarget {
    /// Build a target; a zero duration is raised to one millisecond
    pub fn new(value: u64, duration: Duration) -> Self {
        Self {
            value,
            duration: duration.max(Duration::from_millis(1)),
        }
    }

    /// Read the target and duration from element attributes
    pub fn from_attributes(
        target: Option<&str>,
        duration: Option<&str>,
        default_duration: Duration,
    ) -> Self {
        let duration = duration
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(default_duration);
        Self::new(parse_target(target), duration)
    }
}

/// Parse a counter target, falling back to zero for missing,
/// negative or non-numeric values
pub fn parse_target(raw: Option<&str>) -> u64 {
    match raw.map(str::trim) {
        Some(value) => match value.parse::<u64>() {
            Ok(target) => target,
            Err(e) => {
                tracing::warn!(value, error = %e, "Unparsable counter target, using 0");
                0
            }
        },
        None => {
            tracing::warn!("Counter has no target attribute, using 0");
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target() {
        assert_eq!(parse_target(Some("1500")), 1500);
        assert_eq!(parse_target(Some(" 42 ")), 42);
        assert_eq!(parse_target(Some("")), 0);
        assert_eq!(parse_target(Some("abc")), 0);
        assert_eq!(parse_target(Some("-5")), 0);
        assert_eq!(parse_target(None), 0);
    }

    #[test]
    fn test_duration_override() {
        let default = Duration::from_millis(2000);
        let target = CounterTarget::from_attributes(Some("10"), Some("500"), default);
        assert_eq!(target.duration, Duration::from_millis(500));

        let target = CounterTarget::from_attributes(Some("10"), Some("soon"), default);
        assert_eq!(target.duration, default);

        let target = CounterTarget::from_attributes(Some("10"), Some("0"), default);
        assert_eq!(target.duration, default);
    }

    #[test]
    fn test_zero_duration_is_raised() {
        let target = CounterTarget::new(5, Duration::ZERO);
        assert_eq!(target.duration, Duration::from_millis(1));
    }
}
