//! Page geometry and per-kind style tokens.

use crate::layout::font_metrics::FontFace;

/// RGB fill colour, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

pub const INK: Rgb = Rgb(0.10, 0.10, 0.10);
pub const MEDIUM: Rgb = Rgb(0.20, 0.20, 0.20);
pub const MUTED: Rgb = Rgb(0.40, 0.40, 0.40);
pub const ACCENT: Rgb = Rgb(0.12, 0.25, 0.45);
pub const RULE: Rgb = Rgb(0.75, 0.75, 0.75);

/// A `(face, size, colour)` triple tied to one semantic line kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleToken {
    pub face: FontFace,
    pub size: f32,
    pub color: Rgb,
}

impl StyleToken {
    pub const fn new(face: FontFace, size: f32, color: Rgb) -> Self {
        Self { face, size, color }
    }

    /// Baseline-to-baseline advance for one wrapped line in this style.
    pub fn line_height(&self) -> f32 {
        self.size * LINE_SPACING
    }
}

/// Leading as a multiple of font size.
pub const LINE_SPACING: f32 = 1.35;

pub const NAME: StyleToken = StyleToken::new(FontFace::Bold, 22.0, INK);
pub const HEADLINE: StyleToken = StyleToken::new(FontFace::Regular, 12.0, MEDIUM);
pub const CONTACT: StyleToken = StyleToken::new(FontFace::Regular, 9.0, MUTED);
pub const SECTION_HEADER: StyleToken = StyleToken::new(FontFace::Bold, 12.5, ACCENT);
pub const JOB_TITLE: StyleToken = StyleToken::new(FontFace::Bold, 11.0, MEDIUM);
pub const COMPANY: StyleToken = StyleToken::new(FontFace::Regular, 10.5, MUTED);
pub const PERIOD: StyleToken = StyleToken::new(FontFace::Regular, 9.5, MUTED);
pub const SKILLS_CATEGORY: StyleToken = StyleToken::new(FontFace::Bold, 10.5, MEDIUM);
pub const BODY: StyleToken = StyleToken::new(FontFace::Regular, 10.0, INK);
pub const BODY_BOLD: StyleToken = StyleToken::new(FontFace::Bold, 10.0, INK);

/// Separator between contact fields on the contact line.
pub const CONTACT_SEPARATOR: &str = "  |  ";

/// Vertical gaps in points.
pub const BLANK_GAP: f32 = 4.0;
pub const SECTION_PRE_GAP: f32 = 10.0;
pub const JOB_PRE_GAP: f32 = 6.0;
pub const JOB_POST_GAP: f32 = 3.0;
pub const RULE_GAP: f32 = 8.0;

/// Horizontal indents in points, relative to the left margin.
pub const SKILLS_INDENT: f32 = 8.0;
pub const BODY_INDENT: f32 = 10.0;
pub const SKILLS_BODY_INDENT: f32 = 18.0;

/// Layout parameters for every page of a resume.
#[derive(Debug, Clone)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl PageConfig {
    /// Y of the first baseline on a fresh page.
    pub fn top(&self) -> f32 {
        self.height - self.margin_top
    }

    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }
}

/// Returns the default page config: ISO A4 at 72 dpi with 50pt margins.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width: 595.0,
        height: 842.0,
        margin_left: 50.0,
        margin_right: 50.0,
        margin_top: 50.0,
        margin_bottom: 50.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_page_config_is_a4() {
        let config = default_page_config();
        assert_eq!((config.width, config.height), (595.0, 842.0));
        assert_eq!(config.top(), 792.0);
        assert_eq!(config.content_width(), 495.0);
    }

    #[test]
    fn test_emphasis_style_matches_body_size() {
        assert_eq!(BODY.size, BODY_BOLD.size);
        assert_eq!(BODY_BOLD.face, FontFace::Bold);
    }
}
