//! Grapheme- and width-aware helpers for the text field and list rows.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to at most `max_cells` cells, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme after the one at `byte_offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    let g = grapheme_at(s, byte_offset);
    if g.is_empty() {
        None
    } else {
        Some(byte_offset + g.len())
    }
}

/// Byte offset of the grapheme before `byte_offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, byte_offset: usize) -> Option<usize> {
    s[..byte_offset]
        .grapheme_indices(true)
        .next_back()
        .map(|(i, _)| i)
}

/// The grapheme cluster starting at `byte_offset` ("" at the end).
pub fn grapheme_at(s: &str, byte_offset: usize) -> &str {
    s.get(byte_offset..)
        .and_then(|rest| rest.graphemes(true).next())
        .unwrap_or("")
}

/// Display column of a byte offset.
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    display_width(&s[..byte_offset.min(s.len())])
}

fn is_space(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word at or before `byte_offset` (whitespace-delimited).
pub fn word_boundary_left(s: &str, byte_offset: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..byte_offset].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_space(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word after `byte_offset` (whitespace-delimited).
pub fn word_boundary_right(s: &str, byte_offset: usize) -> usize {
    let mut rest = s[byte_offset..].grapheme_indices(true).peekable();
    while rest.next_if(|(_, g)| !is_space(g)).is_some() {}
    while rest.next_if(|(_, g)| is_space(g)).is_some() {}
    rest.peek().map_or(s.len(), |(i, _)| byte_offset + i)
}
