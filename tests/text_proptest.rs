//! Property-based tests for invariants that must hold for any input
//!
//! - Slugs and punctuation stripping are idempotent
//! - Stats count chars, not bytes
//! - Padding, masking and truncation respect their length contracts

use proptest::prelude::*;
use textlib::{
    is_blank, mask_middle, mask_text, pad_text, remove_all_whitespace, remove_punctuation,
    slugify, stats, truncate, PadSide, SlugOptions, TruncateOptions,
};

/// Mixed-case text with punctuation, whitespace and a few accented letters
fn text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}",
        "[a-zA-Z0-9 _.,!?-]{0,40}",
        "[a-zàéÀÉß \t\n]{0,40}",
    ]
}

fn separator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('-'), Just('_'), Just('.'), Just('~')]
}

proptest! {
    #[test]
    fn slugify_is_idempotent(text in text_strategy(), separator in separator_strategy()) {
        let options = SlugOptions { lowercase: true, separator };
        let once = slugify(&text, &options).unwrap();
        let twice = slugify(&once, &options).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn slugs_only_hold_alphanumerics_and_separator(text in text_strategy()) {
        let slug = slugify(&text, &SlugOptions::default()).unwrap();
        prop_assert!(slug.chars().all(|c| c.is_alphanumeric() || c == '-'));
    }

    #[test]
    fn remove_punctuation_is_idempotent(text in text_strategy()) {
        let once = remove_punctuation(&text);
        prop_assert_eq!(remove_punctuation(&once), once);
    }

    #[test]
    fn char_count_matches_char_length(text in text_strategy()) {
        let result = stats(&text);
        if is_blank(&text) {
            prop_assert_eq!(result.char_count, 0);
            prop_assert_eq!(result.word_count, 0);
        } else {
            prop_assert_eq!(result.char_count, text.chars().count());
            prop_assert_eq!(
                result.char_count_no_spaces,
                remove_all_whitespace(&text).chars().count()
            );
        }
    }

    #[test]
    fn padding_reaches_width(text in text_strategy(), width in 0usize..60) {
        let padded = pad_text(&text, width, '*', PadSide::Left);
        let length = text.chars().count();
        prop_assert_eq!(padded.chars().count(), length.max(width));
        prop_assert!(padded.ends_with(text.as_str()));
    }

    #[test]
    fn masking_preserves_length(text in text_strategy(), start in 0usize..50, span in 0usize..50) {
        let masked = mask_text(&text, start, start + span, '#').unwrap();
        prop_assert_eq!(masked.chars().count(), text.chars().count());

        let middle = mask_middle(&text, start, span, '#');
        prop_assert_eq!(middle.chars().count(), text.chars().count());
    }

    #[test]
    fn truncation_never_exceeds_limit(text in text_strategy(), max_length in 1usize..50) {
        let options = TruncateOptions::default();
        let result = truncate(&text, max_length, &options).unwrap();
        if text.chars().count() <= max_length {
            prop_assert_eq!(result, text);
        } else {
            prop_assert!(result.ends_with("..."));
            prop_assert!(result.chars().count() <= max_length + 3);
        }
    }
}
