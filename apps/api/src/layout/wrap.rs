//! Greedy word-wrap against measured glyph widths.

use crate::layout::font_metrics::{measure_text, FontFace};

/// Wraps `text` into lines no wider than `max_width` points.
///
/// Words are whitespace-separated and never split: a single word wider than
/// `max_width` is emitted as its own (overflowing) line. Runs of whitespace
/// collapse to one space. Empty or whitespace-only input yields no lines.
pub fn wrap_text(text: &str, face: FontFace, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{current} {word}");
        if measure_text(face, &candidate, size_pt) > max_width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current = candidate;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
