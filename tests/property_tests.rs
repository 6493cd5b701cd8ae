//! Property-based tests for output normalization
//!
//! These tests use proptest to verify invariants across many randomly
//! generated inputs, catching edge cases that hand-written tests might miss.

use proptest::prelude::*;
use quill_text::{first_difference, is_space, normalize};

// Strategy for text that looks like program output: printable ASCII, tabs, spaces,
// every line-ending style, the occasional NUL and ASCII separator characters.
fn output_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            4 => "[a-z0-9 =:,]{0,12}",
            1 => Just("\n".to_string()),
            1 => Just("\r\n".to_string()),
            1 => Just("\r".to_string()),
            1 => Just("\t".to_string()),
            1 => Just("\0".to_string()),
            1 => prop::sample::select(vec!["\u{1c}", "\u{1d}", "\u{1e}", "\u{1f}"]).prop_map(str::to_string),
        ],
        0..24,
    )
    .prop_map(|parts| parts.concat())
}

// Lines whose content is trimmed on the right, joined with LF.
fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ a-z0-9]{0,8}[a-z0-9]|", 1..8)
}

proptest! {
    /// Property: normalizing twice is the same as normalizing once
    #[test]
    fn normalize_is_idempotent(raw in output_strategy()) {
        let once = normalize(&raw);
        prop_assert_eq!(normalize(&once), once);
    }

    /// Property: CRLF and LF versions of the same lines normalize identically
    #[test]
    fn normalize_ignores_line_ending_style(lines in lines_strategy()) {
        let unix = lines.join("\n");
        let windows = lines.join("\r\n");
        let old_mac = lines.join("\r");
        prop_assert_eq!(normalize(&windows), normalize(&unix));
        prop_assert_eq!(normalize(&old_mac), normalize(&unix));
    }

    /// Property: normalized text has no NUL, no CR, no trailing whitespace on any line
    /// and no leading or trailing whitespace overall
    #[test]
    fn normalized_text_is_canonical(raw in output_strategy()) {
        let normalized = normalize(&raw);
        prop_assert!(!normalized.contains('\0'));
        prop_assert!(!normalized.contains('\r'));
        prop_assert_eq!(normalized.trim_matches(is_space), normalized.as_str());
        for line in normalized.split('\n') {
            prop_assert_eq!(line.trim_end_matches(is_space), line);
        }
    }

    /// Property: trailing spaces and extra blank lines never cause a mismatch
    #[test]
    fn trailing_noise_is_ignored(lines in lines_strategy(), pad in "[ \t\\x1C-\\x1F]{0,3}", blank in 0usize..3) {
        let golden = lines.join("\n");
        let noisy = lines
            .iter()
            .map(|l| format!("{l}{pad}"))
            .collect::<Vec<_>>()
            .join("\r\n")
            + &"\n".repeat(blank);
        prop_assert_eq!(first_difference(&normalize(&golden), &normalize(&noisy)), None);
    }

    /// Property: internal blank lines survive normalization
    #[test]
    fn internal_blank_lines_are_preserved(head in "[a-z]{1,6}", tail in "[a-z]{1,6}", gap in 1usize..4) {
        let raw = format!("{head}{}{tail}", "\n".repeat(gap + 1));
        prop_assert_eq!(normalize(&raw), raw);
    }
}
