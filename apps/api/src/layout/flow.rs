//! Page Flow Engine: flows classified resume lines onto paginated pages.
//!
//! # Cursor model
//! `PageCursor.y` is the baseline of the next line to draw and only ever decreases
//! on a page. The cursor is checked against the bottom margin after every drawn
//! line and after every top-level line; when it has crossed, a new page of the
//! same size is appended and `y` resets to the top margin. A pre-gap can still
//! push the cursor past the margin, so the check also runs right before each
//! draw. A wrapped line is never split across pages and nothing already drawn
//! is re-flowed.
//!
//! A break after the final line leaves an empty page behind; `finish` drops it.

use tracing::debug;

use crate::layout::classifier::{BodyClassifier, ClassifiedLine};
use crate::layout::dates::format_period;
use crate::layout::emphasis::layout_runs;
use crate::layout::parser::{HeaderInfo, ParsedDocument};
use crate::layout::style::{self, PageConfig, Rgb, StyleToken};
use crate::layout::wrap::wrap_text;

/// One drawing instruction on a page, in PDF user space (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        style: StyleToken,
    },
    Rule {
        x1: f32,
        x2: f32,
        y: f32,
        width: f32,
        color: Rgb,
    },
}

/// Draw operations for a single page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub ops: Vec<DrawOp>,
}

/// Mutable render state: index of the current page and the next baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    pub page: usize,
    pub y: f32,
}

pub struct PageFlowEngine<'a> {
    config: &'a PageConfig,
    pages: Vec<Page>,
    cursor: PageCursor,
}

impl<'a> PageFlowEngine<'a> {
    /// Starts a document with one empty page and the cursor at the top margin.
    pub fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            pages: vec![Page::default()],
            cursor: PageCursor {
                page: 0,
                y: config.top(),
            },
        }
    }

    /// Draws name, headline, contact line and the rule beneath them.
    ///
    /// Absent header fields are skipped.
    pub fn draw_header(&mut self, header: &HeaderInfo) {
        let left = self.config.margin_left;
        let width = self.config.content_width();

        if let Some(name) = &header.name {
            self.draw_wrapped(name, left, width, style::NAME);
        }
        if let Some(headline) = &header.headline {
            self.draw_wrapped(headline, left, width, style::HEADLINE);
        }

        let contact = header.contact_fields().join(style::CONTACT_SEPARATOR);
        if !contact.is_empty() {
            self.draw_wrapped(&contact, left, width, style::CONTACT);
        }

        self.ensure_room();
        let rule_y = self.cursor.y + style::CONTACT.size * 0.5;
        self.current_page().ops.push(DrawOp::Rule {
            x1: left,
            x2: left + width,
            y: rule_y,
            width: 0.75,
            color: style::RULE,
        });
        self.cursor.y -= style::RULE_GAP;
        self.ensure_room();
    }

    /// Flows one classified body line.
    ///
    /// `in_skills` is the classifier's skills-section flag after classifying this line.
    pub fn flow(&mut self, line: &ClassifiedLine, in_skills: bool) {
        let left = self.config.margin_left;
        let width = self.config.content_width();

        match line {
            ClassifiedLine::Blank => {
                self.cursor.y -= style::BLANK_GAP;
            }
            ClassifiedLine::SectionHeader { text } => {
                self.cursor.y -= style::SECTION_PRE_GAP;
                self.draw_wrapped(text, left, width, style::SECTION_HEADER);
            }
            ClassifiedLine::JobEntry {
                title,
                company,
                period,
            } => {
                self.cursor.y -= style::JOB_PRE_GAP;
                self.draw_wrapped(title, left, width, style::JOB_TITLE);
                self.draw_wrapped(company, left, width, style::COMPANY);
                self.draw_wrapped(&format_period(period), left, width, style::PERIOD);
                self.cursor.y -= style::JOB_POST_GAP;
            }
            ClassifiedLine::SkillsCategory { name } => {
                let x = left + style::SKILLS_INDENT;
                self.draw_wrapped(name, x, width - style::SKILLS_INDENT, style::SKILLS_CATEGORY);
            }
            ClassifiedLine::PlainText { text } => {
                let indent = if in_skills {
                    style::SKILLS_BODY_INDENT
                } else {
                    style::BODY_INDENT
                };
                self.draw_emphasized(text, left + indent, width - indent);
            }
        }

        self.ensure_room();
    }

    /// Consumes the engine, returning the finished pages.
    pub fn finish(mut self) -> Vec<Page> {
        if self.pages.len() > 1 && self.pages.last().is_some_and(|p| p.ops.is_empty()) {
            self.pages.pop();
        }
        self.pages
    }

    fn current_page(&mut self) -> &mut Page {
        let idx = self.cursor.page;
        &mut self.pages[idx]
    }

    /// Starts a new page if the cursor has crossed the bottom margin.
    fn ensure_room(&mut self) {
        if self.cursor.y < self.config.margin_bottom {
            self.pages.push(Page::default());
            self.cursor = PageCursor {
                page: self.pages.len() - 1,
                y: self.config.top(),
            };
            debug!("Page break: starting page {}", self.cursor.page + 1);
        }
    }

    fn draw_wrapped(&mut self, text: &str, x: f32, max_width: f32, style: StyleToken) {
        for line in wrap_text(text, style.face, style.size, max_width) {
            self.ensure_room();
            let y = self.cursor.y;
            self.current_page().ops.push(DrawOp::Text {
                x,
                y,
                text: line,
                style,
            });
            self.cursor.y -= style.line_height();
            self.ensure_room();
        }
    }

    fn draw_emphasized(&mut self, text: &str, x: f32, max_width: f32) {
        let body = style::BODY;
        for line in wrap_text(text, body.face, body.size, max_width) {
            self.ensure_room();
            let y = self.cursor.y;
            for run in layout_runs(&line, x) {
                self.current_page().ops.push(DrawOp::Text {
                    x: run.x,
                    y,
                    text: run.text,
                    style: run.style,
                });
            }
            self.cursor.y -= body.line_height();
            self.ensure_room();
        }
    }
}

/// Lays out a parsed resume: header block first, then every body line in order.
pub fn layout_document(doc: &ParsedDocument, config: &PageConfig) -> Vec<Page> {
    let mut engine = PageFlowEngine::new(config);
    engine.draw_header(&doc.header);

    let mut classifier = BodyClassifier::new();
    for raw in &doc.body_lines {
        let line = classifier.classify(raw);
        engine.flow(&line, classifier.in_skills_section());
    }

    let pages = engine.finish();
    debug!(
        "Laid out {} body lines onto {} page(s)",
        doc.body_lines.len(),
        pages.len()
    );
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::font_metrics::FontFace;
    use crate::layout::parser::parse_resume;
    use crate::layout::style::default_page_config;

    const HEADER: &str = "Staff Engineer\nLouis Bailey\nlouis@example.com\n555-0100\nAustin, TX\ngithub.com/lbailey\n\n";

    fn texts(page: &Page) -> Vec<&str> {
        page.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Rule { .. } => None,
            })
            .collect()
    }

    fn all_text_ys(pages: &[Page]) -> Vec<f32> {
        pages
            .iter()
            .flat_map(|p| p.ops.iter())
            .filter_map(|op| match op {
                DrawOp::Text { y, .. } => Some(*y),
                DrawOp::Rule { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_short_resume_fits_one_page() {
        let text = format!("{HEADER}Summary:\nBuilds reliable APIs.");
        let pages = layout_document(&parse_resume(&text), &default_page_config());
        assert_eq!(pages.len(), 1);
        let texts = texts(&pages[0]);
        assert_eq!(texts[0], "Louis Bailey");
        assert!(texts.contains(&"Summary:"));
        assert!(texts.contains(&"Builds reliable APIs."));
    }

    #[test]
    fn test_long_resume_paginates_within_margins() {
        let config = default_page_config();
        let mut text = format!("{HEADER}Experience:\n");
        for i in 0..150 {
            text.push_str(&format!("Delivered project number {i} with **measurable** impact\n"));
        }
        let pages = layout_document(&parse_resume(&text), &config);

        assert!(pages.len() > 1, "expected multiple pages, got {}", pages.len());
        for y in all_text_ys(&pages) {
            assert!(y >= config.margin_bottom, "line drawn below margin at y={y}");
            assert!(y <= config.top());
        }
    }

    #[test]
    fn test_new_page_starts_at_top_margin() {
        let config = default_page_config();
        let mut text = format!("{HEADER}Experience:\n");
        for _ in 0..120 {
            text.push_str("Line of body text\n");
        }
        let pages = layout_document(&parse_resume(&text), &config);
        match pages[1].ops.first() {
            Some(DrawOp::Text { y, .. }) => assert_eq!(*y, config.top()),
            other => panic!("unexpected first op on page 2: {other:?}"),
        }
    }

    #[test]
    fn test_y_strictly_decreases_within_a_page() {
        let text = format!(
            "{HEADER}Experience:\nEngineer at Acme: 01/2020 - 02/2022\nShipped things\nShipped more things"
        );
        let pages = layout_document(&parse_resume(&text), &default_page_config());
        let mut last = f32::MAX;
        for op in &pages[0].ops {
            if let DrawOp::Text { y, .. } = op {
                assert!(*y <= last);
                last = *y;
            }
        }
    }

    #[test]
    fn test_job_entry_draws_title_company_and_formatted_period() {
        let text = format!("{HEADER}Experience:\nSenior Engineer at Acme Corp: 01/2020 - 02/2022");
        let pages = layout_document(&parse_resume(&text), &default_page_config());
        let texts = texts(&pages[0]);
        assert!(texts.contains(&"Senior Engineer"));
        assert!(texts.contains(&"Acme Corp"));
        assert!(texts.contains(&"Jan 2020 \u{2013} Feb 2022"));
    }

    #[test]
    fn test_bold_runs_use_bold_face() {
        let text = format!("{HEADER}Summary:\nCut costs by **30%** overall");
        let pages = layout_document(&parse_resume(&text), &default_page_config());
        let bold_run = pages[0].ops.iter().find_map(|op| match op {
            DrawOp::Text { text, style, .. } if text == "30%" => Some(style.face),
            _ => None,
        });
        assert_eq!(bold_run, Some(FontFace::Bold));
    }

    #[test]
    fn test_skills_section_indents_plain_lines_deeper() {
        let config = default_page_config();
        let text = format!("{HEADER}Skills:\n\u{00B7} Backend\nRust, Go, PostgreSQL");
        let pages = layout_document(&parse_resume(&text), &config);
        let x_of = |needle: &str| {
            pages[0].ops.iter().find_map(|op| match op {
                DrawOp::Text { text, x, .. } if text == needle => Some(*x),
                _ => None,
            })
        };
        assert_eq!(x_of("Backend"), Some(config.margin_left + style::SKILLS_INDENT));
        assert_eq!(
            x_of("Rust, Go, PostgreSQL"),
            Some(config.margin_left + style::SKILLS_BODY_INDENT)
        );
    }

    #[test]
    fn test_missing_header_fields_do_not_panic() {
        let pages = layout_document(&parse_resume("Only a headline"), &default_page_config());
        assert_eq!(pages.len(), 1);
        assert_eq!(texts(&pages[0]), vec!["Only a headline"]);
    }

    fn placed(pages: &[Page], needle: &str) -> Option<(usize, f32)> {
        pages.iter().enumerate().find_map(|(idx, page)| {
            page.ops.iter().find_map(|op| match op {
                DrawOp::Text { text, y, .. } if text == needle => Some((idx, *y)),
                _ => None,
            })
        })
    }

    fn plain(text: &str) -> ClassifiedLine {
        ClassifiedLine::PlainText {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_blank_crossing_margin_starts_new_page() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        engine.cursor.y = config.margin_bottom + 1.0;
        engine.flow(&ClassifiedLine::Blank, false);
        assert_eq!(engine.pages.len(), 2);
        assert_eq!(engine.cursor, PageCursor { page: 1, y: config.top() });
    }

    #[test]
    fn test_section_header_after_break_keeps_its_pre_gap() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        engine.cursor.y = config.margin_bottom + 2.0;
        engine.flow(&plain("Last line of page one"), false);
        engine.flow(
            &ClassifiedLine::SectionHeader {
                text: "Education:".to_string(),
            },
            false,
        );
        let pages = engine.finish();

        assert_eq!(
            placed(&pages, "Last line of page one"),
            Some((0, config.margin_bottom + 2.0))
        );
        assert_eq!(
            placed(&pages, "Education:"),
            Some((1, config.top() - style::SECTION_PRE_GAP))
        );
    }

    #[test]
    fn test_section_pre_gap_crossing_margin_draws_on_next_page() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        engine.cursor.y = config.margin_bottom + style::SECTION_PRE_GAP / 2.0;
        engine.flow(
            &ClassifiedLine::SectionHeader {
                text: "Projects:".to_string(),
            },
            false,
        );
        let pages = engine.finish();
        assert_eq!(placed(&pages, "Projects:"), Some((1, config.top())));
        assert!(pages[0].ops.is_empty());
    }

    #[test]
    fn test_job_entry_blocks_break_between_lines() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        // Room for the title and company only.
        let start = config.margin_bottom + style::JOB_PRE_GAP + 20.0;
        engine.cursor.y = start;
        engine.flow(
            &ClassifiedLine::JobEntry {
                title: "Engineer".to_string(),
                company: "Acme".to_string(),
                period: "01/2020 - 02/2022".to_string(),
            },
            false,
        );
        let after = engine.cursor;
        let pages = engine.finish();

        let title_y = start - style::JOB_PRE_GAP;
        let company_y = title_y - style::JOB_TITLE.line_height();
        assert_eq!(placed(&pages, "Engineer"), Some((0, title_y)));
        let (company_page, y) = placed(&pages, "Acme").unwrap();
        assert_eq!(company_page, 0);
        assert!((y - company_y).abs() < 1e-3);
        assert_eq!(
            placed(&pages, "Jan 2020 \u{2013} Feb 2022"),
            Some((1, config.top()))
        );
        let expected = config.top() - style::PERIOD.line_height() - style::JOB_POST_GAP;
        assert_eq!(after.page, 1);
        assert!((after.y - expected).abs() < 1e-3);
    }

    #[test]
    fn test_run_of_blank_lines_breaks_once() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        engine.cursor.y = config.margin_bottom + 10.0;
        for _ in 0..3 {
            engine.flow(&ClassifiedLine::Blank, false);
        }
        engine.flow(&plain("First line after the gap"), false);
        let pages = engine.finish();
        assert_eq!(pages.len(), 2);
        assert_eq!(
            placed(&pages, "First line after the gap"),
            Some((1, config.top()))
        );
    }

    #[test]
    fn test_break_after_final_line_leaves_no_empty_page() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        engine.cursor.y = config.margin_bottom + 2.0;
        engine.flow(&plain("Closing line"), false);
        assert_eq!(engine.pages.len(), 2);
        let pages = engine.finish();
        assert_eq!(pages.len(), 1);
        assert_eq!(placed(&pages, "Closing line"), Some((0, config.margin_bottom + 2.0)));
    }

    #[test]
    fn test_mixed_document_never_draws_below_margin() {
        let config = default_page_config();
        let mut text = HEADER.to_string();
        for i in 0..12 {
            text.push_str(&format!("\nSection {i}:\n"));
            text.push_str(&format!("Engineer {i} at Company {i}: 01/2019 - 02/2021\n"));
            text.push_str("Shipped **measurable** improvements across several services\n\n\n");
            text.push_str("\u{00B7} Languages\nRust, Go, SQL\n");
        }
        let pages = layout_document(&parse_resume(&text), &config);

        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| !p.ops.is_empty()));
        for y in all_text_ys(&pages) {
            assert!(y >= config.margin_bottom, "line drawn below margin at y={y}");
            assert!(y <= config.top());
        }
    }

    #[test]
    fn test_blank_lines_only_move_the_cursor() {
        let config = default_page_config();
        let mut engine = PageFlowEngine::new(&config);
        let before = engine.cursor;
        engine.flow(&ClassifiedLine::Blank, false);
        assert_eq!(engine.cursor.y, before.y - style::BLANK_GAP);
        assert!(engine.finish()[0].ops.is_empty());
    }
}
