//! Resume Parser: splits tailored resume text into the positional header block and body.
//!
//! The header is not labelled: the first six non-blank lines are taken, in order, as
//! headline, name, email, phone, location and link. Fewer than six non-blank lines
//! leaves the trailing fields empty rather than failing.

/// Number of positional header lines expected before the body.
pub const HEADER_LINE_COUNT: usize = 6;

/// The six positional header fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub headline: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub link: Option<String>,
}

impl HeaderInfo {
    /// Contact fields in display order, skipping absent ones.
    pub fn contact_fields(&self) -> Vec<&str> {
        [&self.email, &self.phone, &self.location, &self.link]
            .into_iter()
            .filter_map(|f| f.as_deref())
            .collect()
    }
}

/// Output of `parse_resume`: header fields plus the untouched body lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    pub header: HeaderInfo,
    pub body_lines: Vec<String>,
}

/// Parses raw resume text into a `ParsedDocument`.
pub fn parse_resume(text: &str) -> ParsedDocument {
    let lines: Vec<&str> = text.lines().collect();

    let mut collected: Vec<String> = Vec::with_capacity(HEADER_LINE_COUNT);
    let mut body_start = lines.len();

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        collected.push(trimmed.to_string());
        if collected.len() == HEADER_LINE_COUNT {
            body_start = idx + 1;
            break;
        }
    }

    while body_start < lines.len() && lines[body_start].trim().is_empty() {
        body_start += 1;
    }

    let mut fields = collected.into_iter();
    let header = HeaderInfo {
        headline: fields.next(),
        name: fields.next(),
        email: fields.next(),
        phone: fields.next(),
        location: fields.next(),
        link: fields.next(),
    };

    let body_lines = lines[body_start..]
        .iter()
        .map(|l| (*l).to_string())
        .collect();

    ParsedDocument { header, body_lines }
}
