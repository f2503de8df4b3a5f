//! Document Builder: parse, lay out and serialize a tailored resume to PDF bytes.
//!
//! Object layout: catalog, page tree, the regular and bold font dictionaries,
//! then one page object and one content stream per laid-out page. Text is
//! encoded as WinAnsi; characters outside that code page are written as `?`.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use thiserror::Error;
use tracing::info;

use crate::layout::flow::{layout_document, DrawOp, Page};
use crate::layout::font_metrics::FontFace;
use crate::layout::parser::parse_resume;
use crate::layout::style::PageConfig;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("resume text is empty")]
    EmptyInput,

    #[error("render task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

const FONT_FACES: [FontFace; 2] = [FontFace::Regular, FontFace::Bold];

/// Builds the PDF for a tailored resume transcript.
pub fn build_resume_pdf(text: &str, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    if text.trim().is_empty() {
        return Err(RenderError::EmptyInput);
    }

    let parsed = parse_resume(text);
    let pages = layout_document(&parsed, config);
    let bytes = write_pdf(&pages, config);

    info!(
        "Rendered resume PDF: {} page(s), {} bytes",
        pages.len(),
        bytes.len()
    );
    Ok(bytes)
}

/// Runs `build_resume_pdf` on the blocking pool so layout does not stall the executor.
pub async fn render_resume_pdf(text: String, config: PageConfig) -> Result<Vec<u8>, RenderError> {
    tokio::task::spawn_blocking(move || build_resume_pdf(&text, &config)).await?
}

/// Serializes laid-out pages into a complete PDF file.
pub fn write_pdf(pages: &[Page], config: &PageConfig) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let font_ids = [Ref::new(3), Ref::new(4)];

    let page_refs: Vec<(Ref, Ref)> = (0..pages.len() as i32)
        .map(|i| (Ref::new(5 + 2 * i), Ref::new(6 + 2 * i)))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_refs.iter().map(|(page_id, _)| *page_id))
        .count(pages.len() as i32);

    for (face, font_id) in FONT_FACES.iter().zip(font_ids) {
        pdf.type1_font(font_id)
            .base_font(Name(face.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let media_box = Rect::new(0.0, 0.0, config.width, config.height);
    for (page, (page_id, content_id)) in pages.iter().zip(&page_refs) {
        let mut writer = pdf.page(*page_id);
        writer.media_box(media_box);
        writer.parent(page_tree_id);
        writer.contents(*content_id);
        {
            let mut resources = writer.resources();
            let mut fonts = resources.fonts();
            for (face, font_id) in FONT_FACES.iter().zip(font_ids) {
                fonts.pair(Name(face.resource_name()), font_id);
            }
        }
        writer.finish();

        let content = encode_page(page);
        pdf.stream(*content_id, &content.finish());
    }

    pdf.finish()
}

fn encode_page(page: &Page) -> Content {
    let mut content = Content::new();
    for op in &page.ops {
        match op {
            DrawOp::Text { x, y, text, style } => {
                content.set_fill_rgb(style.color.0, style.color.1, style.color.2);
                content.begin_text();
                content.set_font(Name(style.face.resource_name()), style.size);
                content.next_line(*x, *y);
                content.show(Str(&encode_win_ansi(text)));
                content.end_text();
            }
            DrawOp::Rule {
                x1,
                x2,
                y,
                width,
                color,
            } => {
                content.set_stroke_rgb(color.0, color.1, color.2);
                content.set_line_width(*width);
                content.move_to(*x1, *y);
                content.line_to(*x2, *y);
                content.stroke();
            }
        }
    }
    content
}

/// Encodes text for a simple font with `WinAnsiEncoding`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{00A0}'..='\u{00FF}' => c as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            _ => b'?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::style::default_page_config;

    const RESUME: &str = "Senior Backend Engineer\n\
        Louis Bailey\n\
        louis@example.com\n\
        +1 555 0100\n\
        Austin, TX\n\
        linkedin.com/in/louisbailey\n\
        \n\
        Summary:\n\
        Builds **reliable** APIs.\n\
        Experience:\n\
        Senior Engineer at Acme Corp: 01/2020 - 02/2022\n\
        Led the payments platform rewrite.";

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let err = build_resume_pdf("  \n ", &default_page_config()).unwrap_err();
        assert!(matches!(err, RenderError::EmptyInput));
    }

    #[test]
    fn test_output_is_a_pdf_with_both_faces() {
        let bytes = build_resume_pdf(RESUME, &default_page_config()).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"%%EOF"));
        assert!(contains(&bytes, b"/Helvetica-Bold"));
        assert!(contains(&bytes, b"/Helvetica"));
        assert!(contains(&bytes, b"/WinAnsiEncoding"));
    }

    #[test]
    fn test_drawn_text_is_extractable() {
        let bytes = build_resume_pdf(RESUME, &default_page_config()).unwrap();
        let text = pdf_extract::extract_text_from_mem(&bytes).unwrap();
        assert!(text.contains("Louis Bailey"), "extracted: {text}");
        assert!(text.contains("Summary:"), "extracted: {text}");
    }

    #[test]
    fn test_win_ansi_maps_typographic_glyphs() {
        assert_eq!(encode_win_ansi("a\u{2013}b"), vec![b'a', 0x96, b'b']);
        assert_eq!(encode_win_ansi("\u{00B7}"), vec![0xB7]);
        assert_eq!(encode_win_ansi("caf\u{00E9}"), b"caf\xE9".to_vec());
        assert_eq!(encode_win_ansi("\u{4E2D}"), vec![b'?']);
    }

    #[tokio::test]
    async fn test_render_runs_on_blocking_pool() {
        let bytes = render_resume_pdf(RESUME.to_string(), default_page_config())
            .await
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
