//! Body Classifier: purely syntactic classification of resume body lines.
//!
//! # Precedence
//! 1. blank → `Blank`
//! 2. trimmed line ends with `:` → `SectionHeader`
//! 3. `<title> at <company>: <period>` → `JobEntry`
//! 4. starts with `·` → `SkillsCategory`
//! 5. anything else → `PlainText` (emphasis markers are left for render time)

use std::sync::OnceLock;

use regex::Regex;

/// Bullet glyph that introduces a skills category label.
pub const SKILL_BULLET: char = '\u{00B7}';

const SKILLS_HEADER: &str = "skills:";

/// One classified body line. Exactly one variant applies per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    Blank,
    SectionHeader { text: String },
    JobEntry { title: String, company: String, period: String },
    SkillsCategory { name: String },
    PlainText { text: String },
}

fn job_entry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.+?)\s+at\s+([^:]+):(.+)$").expect("valid job entry regex"))
}

/// Single-pass classifier. Carries the skills-section tracking flag across lines.
#[derive(Debug, Default)]
pub struct BodyClassifier {
    in_skills: bool,
}

impl BodyClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// True between a `Skills:` header and the next section header.
    pub fn in_skills_section(&self) -> bool {
        self.in_skills
    }

    /// Classifies one body line, updating skills tracking on section headers.
    pub fn classify(&mut self, line: &str) -> ClassifiedLine {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            return ClassifiedLine::Blank;
        }

        if trimmed.ends_with(':') {
            self.in_skills = trimmed.to_lowercase() == SKILLS_HEADER;
            return ClassifiedLine::SectionHeader {
                text: trimmed.to_string(),
            };
        }

        if let Some(caps) = job_entry_regex().captures(trimmed) {
            let title = caps[1].trim();
            let company = caps[2].trim();
            let period = caps[3].trim();
            if !title.is_empty() && !company.is_empty() && !period.is_empty() {
                return ClassifiedLine::JobEntry {
                    title: title.to_string(),
                    company: company.to_string(),
                    period: period.to_string(),
                };
            }
        }

        if let Some(rest) = trimmed.strip_prefix(SKILL_BULLET) {
            return ClassifiedLine::SkillsCategory {
                name: rest.trim().to_string(),
            };
        }

        ClassifiedLine::PlainText {
            text: line.to_string(),
        }
    }
}
