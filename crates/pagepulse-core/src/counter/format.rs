//! Count formatting

use num_format::{Locale, ToFormattedString};

/// Render an integer with comma thousands separators
pub fn group_thousands(value: u64) -> String {
    value.to_formatted_string(&Locale::en)
}

/// Text shown for a counter displaying `value` on its way to `target`
///
/// Large targets carry a trailing "+" on every frame, not only the last one.
pub fn format_count(value: u64, target: u64, plus_threshold: u64) -> String {
    let mut text = group_thousands(value);
    if target > plus_threshold {
        text.push('+');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1500), "1,500");
        assert_eq!(group_thousands(123456), "123,456");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_plus_follows_target_not_value() {
        assert_eq!(format_count(750, 1500, 1000), "750+");
        assert_eq!(format_count(1500, 1500, 1000), "1,500+");
        assert_eq!(format_count(1000, 1000, 1000), "1,000");
        assert_eq!(format_count(0, 0, 1000), "0");
    }
}
