//! Token estimation.
//!
//! Uses a character-based heuristic of ~4 bytes per token, plus structural
//! overhead for markdown headings and bullet lines, which tokenize worse
//! than their raw length suggests.

/// Added once per line whose first non-whitespace character is `#`.
pub const HEADING_PENALTY: usize = 3;

/// Added once per line whose first non-whitespace character is `-` or `*`.
pub const BULLET_PENALTY: usize = 1;

/// Estimate the token count for a string.
///
/// Monotonic: appending text never lowers the estimate, because a line's
/// first non-whitespace character is fixed once it exists.
pub fn estimate(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.len().div_ceil(4) + text.lines().map(line_overhead).sum::<usize>()
}

fn line_overhead(line: &str) -> usize {
    match line.trim_start().chars().next() {
        Some('#') => HEADING_PENALTY,
        Some('-' | '*') => BULLET_PENALTY,
        _ => 0,
    }
}
