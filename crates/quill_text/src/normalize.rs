//! Canonicalize captured program output.
//!
//! ## Notes
//! - **Null bytes**: removed entirely. Some runtimes pad their stdout buffer with `\0`.
//! - **Line endings**: `\r\n` and lone `\r` both become `\n`.
//! - **Whitespace**: the whole text is trimmed on both ends, then every line is trimmed on the right. Leading
//!   whitespace of inner lines and blank lines between content are kept.
//! - **What counts as whitespace**: Unicode `White_Space` plus the ASCII separators U+001C..U+001F, so output
//!   normalizes the same way the existing Python comparison scripts did.

/// Separator used between lines of normalized text.
pub const LINE_SEPARATOR: char = '\n';

/// Produce the canonical form of `raw` used for golden comparisons.
///
/// ## Parameters
/// - `raw`: text as captured from a process or read from a golden file.
///
/// ## Returns
/// - (`String`): the normalized text. Normalizing the result again returns it unchanged.
pub fn normalize(raw: &str) -> String {
    let unified = unify_line_endings(&strip_nul(raw));

    unified
        .trim_matches(is_space)
        .split(LINE_SEPARATOR)
        .map(|line| line.trim_end_matches(is_space))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Whether `c` is trimmed by normalization.
///
/// ## Notes
/// - Wider than `char::is_whitespace`: the file, group, record and unit separators (U+001C..U+001F) count too.
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn strip_nul(raw: &str) -> String {
    raw.replace('\0', "")
}

// Order matters: `\r\n` first so a Windows ending does not become two line breaks.
fn unify_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
