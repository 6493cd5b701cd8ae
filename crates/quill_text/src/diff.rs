//! Locate and render line-level differences between two normalized texts.
//!
//! Both helpers compare line `i` of one text with line `i` of the other. There is no alignment step: an inserted
//! line shows up as a difference on every line after it, which is good enough to point a reader at the first
//! divergence of a program's output.

use std::fmt::Write as _;

/// Find the first line on which `expected` and `actual` disagree.
///
/// ## Parameters
/// - `expected`: normalized golden text.
/// - `actual`: normalized captured text.
///
/// ## Returns
/// - `Option<usize>`: the 1-based line number of the first differing line, or `None` if the texts are equal. A
///   line present in only one text counts as a difference.
pub fn first_difference(expected: &str, actual: &str) -> Option<usize> {
    if expected == actual {
        return None;
    }

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let max_lines = expected_lines.len().max(actual_lines.len());

    (0..max_lines)
        .find(|&i| expected_lines.get(i) != actual_lines.get(i))
        .map(|i| i + 1)
}

/// Render a line-by-line diff of two texts.
///
/// Lines only in (or changed from) `expected` are prefixed with `-`, lines from `actual` with `+`. Equal lines
/// are omitted. Returns an empty string for equal texts.
pub fn line_diff(expected: &str, actual: &str) -> String {
    let mut diff = String::new();
    if expected == actual {
        return diff;
    }

    let expected_lines: Vec<&str> = expected.split('\n').collect();
    let actual_lines: Vec<&str> = actual.split('\n').collect();
    let max_lines = expected_lines.len().max(actual_lines.len());

    for i in 0..max_lines {
        let old = expected_lines.get(i);
        let new = actual_lines.get(i);
        if old == new {
            continue;
        }
        if let Some(line) = old {
            let _ = writeln!(diff, "-{:4} | {}", i + 1, line);
        }
        if let Some(line) = new {
            let _ = writeln!(diff, "+{:4} | {}", i + 1, line);
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_difference_equal_texts() {
        assert_eq!(first_difference("a\nb", "a\nb"), None);
        assert_eq!(first_difference("", ""), None);
    }

    #[test]
    fn test_first_difference_changed_line() {
        assert_eq!(first_difference("x\ny", "x\nz"), Some(2));
        assert_eq!(first_difference("x", "y"), Some(1));
    }

    #[test]
    fn test_first_difference_missing_trailing_line() {
        assert_eq!(first_difference("a\nb\nc", "a\nb"), Some(3));
        assert_eq!(first_difference("a", "a\nextra"), Some(2));
    }

    #[test]
    fn test_line_diff_equal_is_empty() {
        assert!(line_diff("same\ntext", "same\ntext").is_empty());
    }

    #[test]
    fn test_line_diff_marks_changed_line() {
        assert_eq!(line_diff("x\ny", "x\nz"), "-   2 | y\n+   2 | z\n");
    }

    #[test]
    fn test_line_diff_extra_actual_line() {
        assert_eq!(line_diff("a", "a\nb"), "+   2 | b\n");
    }
}
