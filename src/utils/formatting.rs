//! Formatting utilities used for CLI and export outputs.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad to `width` display columns (not bytes).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Cut `s` to at most `width` display columns.
/// No ellipsis: a token may be cut mid-string.
pub fn truncate_width(s: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;

    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }

    out
}

/// Center `s` in a line of `width` columns.
pub fn center(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        return s.to_string();
    }
    let left = (width - w) / 2;
    let right = width - w - left;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(right))
}

/// A separator line made of `ch` (first char of the configured string).
pub fn separator(ch: &str, width: usize) -> String {
    ch.chars().next().unwrap_or('-').to_string().repeat(width)
}
