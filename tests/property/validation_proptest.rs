//! Property-based tests for field validation rules

use board::shared::validation::{field, normalize_text};
use board::shared::ValidationErrors;
use proptest::prelude::*;

const TOO_LONG: &str = "too long";
const REQUIRED: &str = "required";

proptest! {
    #[test]
    fn test_max_chars_counts_characters(s in "\\PC{0,300}") {
        let result = ValidationErrors::check([field("content", Some(s.as_str())).max_chars(255, TOO_LONG)]);
        prop_assert_eq!(result.is_ok(), s.chars().count() <= 255);
    }

    #[test]
    fn test_whitespace_only_is_missing(s in "[ \t\n]{0,20}") {
        let normalized = normalize_text(Some(s));
        prop_assert!(normalized.is_none());
        let err = ValidationErrors::check([field("title", normalized.as_deref()).required(REQUIRED)])
            .unwrap_err();
        prop_assert_eq!(err.first_message(), Some(REQUIRED));
    }

    #[test]
    fn test_first_failing_field_reports(title_len in 0usize..300, content_len in 0usize..300) {
        let title = "t".repeat(title_len);
        let content = "c".repeat(content_len);
        let title = normalize_text(Some(title));
        let content = normalize_text(Some(content));

        let result = ValidationErrors::check([
            field("title", title.as_deref()).required("title required").max_chars(255, "title long"),
            field("content", content.as_deref()).required("content required"),
        ]);

        let expected = if title_len == 0 {
            Some("title required")
        } else if title_len > 255 {
            Some("title long")
        } else if content_len == 0 {
            Some("content required")
        } else {
            None
        };
        prop_assert_eq!(result.err().and_then(|e| e.first_message()), expected);
    }
}
