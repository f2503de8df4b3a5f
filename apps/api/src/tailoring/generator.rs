//! Tailoring pipeline: compose prompt → completion → layout → PDF bytes.

use std::sync::OnceLock;

use regex::Regex;
use tracing::info;

use crate::errors::AppError;
use crate::layout::{parse_resume, render_resume_pdf, PageConfig};
use crate::llm_client::{CompletionService, LlmError};
use crate::tailoring::prompts::{build_tailor_prompt, TAILOR_SYSTEM};

/// Validated inputs for one tailoring request.
#[derive(Debug, Clone)]
pub struct TailorRequest {
    pub job_description: String,
    pub company: String,
    pub role: String,
}

/// A finished resume ready to send.
#[derive(Debug, Clone)]
pub struct TailoredResume {
    pub filename: String,
    pub pdf: Vec<u8>,
}

/// Runs the full tailoring pipeline.
///
/// Steps:
/// 1. build_tailor_prompt() from the base resume and request fields
/// 2. completion.complete() → tailored transcript (empty → error, no PDF attempted)
/// 3. render_resume_pdf() on the blocking pool
/// 4. download_filename() from the transcript's name line
pub async fn tailor_resume(
    completion: &dyn CompletionService,
    base_resume: &str,
    page_config: &PageConfig,
    request: &TailorRequest,
) -> Result<TailoredResume, AppError> {
    let prompt = build_tailor_prompt(
        base_resume,
        &request.job_description,
        &request.company,
        &request.role,
    );

    info!(
        "Requesting tailored resume for role '{}' at '{}'",
        request.role, request.company
    );
    let transcript = completion.complete(TAILOR_SYSTEM, &prompt).await?;
    if transcript.trim().is_empty() {
        return Err(LlmError::EmptyContent.into());
    }

    let name = parse_resume(&transcript).header.name;
    let filename = download_filename(name.as_deref(), &request.company, &request.role);

    let pdf = render_resume_pdf(transcript, page_config.clone()).await?;
    info!("Tailored resume ready: {filename} ({} bytes)", pdf.len());

    Ok(TailoredResume { filename, pdf })
}

/// Replaces every character outside `[a-zA-Z0-9_]` with `_`.
pub fn sanitize_filename_part(part: &str) -> String {
    part.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn underscore_run_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new("_+").expect("valid underscore regex"))
}

/// `<Name>_<Company>_<Role>.pdf`, each part sanitized and runs of `_` collapsed to one.
/// A missing name becomes `Resume`.
pub fn download_filename(name: Option<&str>, company: &str, role: &str) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("Resume");
    let stem = format!(
        "{}_{}_{}",
        sanitize_filename_part(name),
        sanitize_filename_part(company.trim()),
        sanitize_filename_part(role.trim())
    );
    format!("{}.pdf", underscore_run_regex().replace_all(&stem, "_"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    use crate::layout::default_page_config;

    struct RecordingStub {
        reply: String,
        seen: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl CompletionService for RecordingStub {
        async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
            self.seen
                .lock()
                .unwrap()
                .push((system.to_string(), prompt.to_string()));
            Ok(self.reply.clone())
        }
    }

    fn request() -> TailorRequest {
        TailorRequest {
            job_description: "Build APIs".to_string(),
            company: "Acme Inc.".to_string(),
            role: "Backend Eng.".to_string(),
        }
    }

    #[test]
    fn test_sanitize_replaces_everything_but_word_chars() {
        assert_eq!(sanitize_filename_part("Acme Inc."), "Acme_Inc_");
        assert_eq!(sanitize_filename_part("R&D / Ops"), "R_D___Ops");
        assert_eq!(sanitize_filename_part("caf\u{00E9}_2"), "caf__2");
    }

    #[test]
    fn test_download_filename() {
        assert_eq!(
            download_filename(Some("Louis Bailey"), "Acme Inc.", "Backend Eng."),
            "Louis_Bailey_Acme_Inc_Backend_Eng_.pdf"
        );
        assert_eq!(download_filename(None, "Acme", "SRE"), "Resume_Acme_SRE.pdf");
    }

    #[test]
    fn test_download_filename_collapses_underscore_runs() {
        assert_eq!(
            download_filename(Some("Jane  Doe"), "R&D / Ops", "Eng. (II)"),
            "Jane_Doe_R_D_Ops_Eng_II_.pdf"
        );
        assert_eq!(download_filename(Some("___"), "__Acme__", "SRE"), "_Acme_SRE.pdf");
    }

    #[tokio::test]
    async fn test_pipeline_sends_prompt_and_returns_pdf() {
        let stub = RecordingStub {
            reply: "Backend Engineer\nLouis Bailey\nl@b.dev\n555\nAustin\nlb.dev\n\nSummary:\nBuilds APIs."
                .to_string(),
            seen: Mutex::new(Vec::new()),
        };
        let resume = tailor_resume(&stub, "BASE RESUME", &default_page_config(), &request())
            .await
            .unwrap();

        assert_eq!(resume.filename, "Louis_Bailey_Acme_Inc_Backend_Eng_.pdf");
        assert!(resume.pdf.starts_with(b"%PDF-"));

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, TAILOR_SYSTEM);
        assert!(seen[0].1.contains("BASE RESUME"));
        assert!(seen[0].1.contains("Build APIs"));
    }

    #[tokio::test]
    async fn test_blank_completion_is_a_service_error() {
        let stub = RecordingStub {
            reply: "  \n".to_string(),
            seen: Mutex::new(Vec::new()),
        };
        let err = tailor_resume(&stub, "BASE", &default_page_config(), &request())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
    }
}
