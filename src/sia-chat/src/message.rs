//! Message text assembly.
//!
//! The widget supports exactly one markdown rule: `**text**` becomes a
//! `<strong>` span. The replacement happens before a payload reaches the
//! typewriter, so the resulting tags stream atomically like any other
//! markup span.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Converts `**text**` pairs to `<strong>text</strong>`.
///
/// Matching is non-greedy and does not cross line boundaries. Unpaired
/// `**` markers are left untouched.
pub fn format_bold(text: &str) -> String {
    BOLD_RE.replace_all(text, "<strong>$1</strong>").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bold_basic() {
        assert_eq!(format_bold("**hi**"), "<strong>hi</strong>");
        assert_eq!(
            format_bold("a **b** c **d**"),
            "a <strong>b</strong> c <strong>d</strong>"
        );
    }

    #[test]
    fn test_format_bold_non_greedy() {
        assert_eq!(
            format_bold("**a** and **b**"),
            "<strong>a</strong> and <strong>b</strong>"
        );
    }

    #[test]
    fn test_format_bold_unpaired_markers_kept() {
        assert_eq!(format_bold("** alone"), "** alone");
        assert_eq!(format_bold("plain text"), "plain text");
    }

    #[test]
    fn test_format_bold_does_not_cross_lines() {
        assert_eq!(format_bold("**a\nb**"), "**a\nb**");
    }

    #[test]
    fn test_format_bold_empty_pair() {
        assert_eq!(format_bold("****"), "<strong></strong>");
    }
}
