//! Code-point based text metrics for the layout engines.
//!
//! Widths are counted in Unicode code points, not bytes. Nerd Font glyphs and
//! non-ASCII names are several bytes long in UTF-8 but occupy one column each
//! in the grid, so byte lengths would break column alignment.
//!
//! Escape sequences are never passed through these helpers; callers measure the
//! visible text and add color codes afterwards.

/// Number of Unicode code points in `s`.
#[inline]
pub fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Returns the first `max_width` code points of `s`.
///
/// The cut always lands on a char boundary. If `s` already fits it is returned unchanged.
pub fn truncate(s: &str, max_width: usize) -> &str {
    match s.char_indices().nth(max_width) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

/// Splits `s` after `max_width` code points.
///
/// `head` is [truncate]`(s, max_width)` and `tail` is whatever follows it, so
/// `head + tail == s` for every input.
pub fn split_overflow(s: &str, max_width: usize) -> (&str, &str) {
    let head = truncate(s, max_width);
    (head, &s[head.len()..])
}

/// Left-justifies `s` in a field of `width` code points. Never truncates.
pub fn pad_right(s: &str, width: usize) -> String {
    let mut out = String::with_capacity(s.len() + width);
    out.push_str(s);
    out.push_str(&" ".repeat(width.saturating_sub(display_width(s))));
    out
}

/// Right-justifies `s` in a field of `width` code points. Never truncates.
pub fn pad_left(s: &str, width: usize) -> String {
    let mut out = " ".repeat(width.saturating_sub(display_width(s)));
    out.push_str(s);
    out
}
