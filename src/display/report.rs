//! Report formatting utilities for terminal output
//!
//! Provides the small formatting helpers shared by the revenue report and
//! the exit dialogue.

/// Format elapsed hours with one decimal place
pub fn format_hours(hours: f64) -> String {
    format!("{:.1}", hours)
}

/// Format a paid flag as Yes/No
pub fn format_paid(paid: bool) -> &'static str {
    if paid {
        "Yes"
    } else {
        "No"
    }
}

/// Right-align text in a field of given width
///
/// Text wider than the field is returned unchanged, never cut.
pub fn right_align(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(0.0), "0.0");
        assert_eq!(format_hours(1.24), "1.2");
        assert_eq!(format_hours(2.96), "3.0");
    }

    #[test]
    fn test_format_paid() {
        assert_eq!(format_paid(true), "Yes");
        assert_eq!(format_paid(false), "No");
    }

    #[test]
    fn test_right_align() {
        assert_eq!(right_align("abc", 5), "  abc");
        assert_eq!(right_align("abcdef", 3), "abcdef");
    }
}
