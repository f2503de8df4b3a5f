//! Inline Emphasis Renderer: `**bold**` spans as alternating regular/bold runs.

use crate::layout::font_metrics::measure_text;
use crate::layout::style::{StyleToken, BODY, BODY_BOLD};

const MARKER: &str = "**";

/// A contiguous piece of a line set in one style.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub bold: bool,
}

/// A run placed at an absolute x position.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedRun {
    pub text: String,
    pub x: f32,
    pub style: StyleToken,
}

/// Splits a line on `**` markers. Odd segments are bold; empty segments are dropped.
///
/// An unmatched trailing marker simply turns the rest of the line bold.
pub fn split_emphasis(line: &str) -> Vec<Run> {
    line.split(MARKER)
        .enumerate()
        .filter(|(_, segment)| !segment.is_empty())
        .map(|(i, segment)| Run {
            text: segment.to_string(),
            bold: i % 2 == 1,
        })
        .collect()
}

/// Lays out the runs of `line` left to right from `x`, advancing by each run's measured width.
pub fn layout_runs(line: &str, x: f32) -> Vec<PositionedRun> {
    let mut cursor_x = x;
    split_emphasis(line)
        .into_iter()
        .map(|run| {
            let style = if run.bold { BODY_BOLD } else { BODY };
            let placed = PositionedRun {
                x: cursor_x,
                text: run.text,
                style,
            };
            cursor_x += measure_text(style.face, &placed.text, style.size);
            placed
        })
        .collect()
}
