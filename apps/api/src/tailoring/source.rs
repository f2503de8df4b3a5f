//! Base resume loading. Runs once at startup.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::info;

use crate::tailoring::prompts::DEFAULT_BASE_RESUME;

/// Loads the base resume from `path`, or returns the built-in resume when `None`.
///
/// `.pdf` files (case-insensitive extension) are text-extracted; anything else is read as UTF-8.
pub fn load_base_resume(path: Option<&Path>) -> Result<String> {
    let Some(path) = path else {
        info!("Using built-in base resume");
        return Ok(DEFAULT_BASE_RESUME.to_string());
    };

    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    let text = if is_pdf {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read base resume PDF '{}'", path.display()))?;
        pdf_extract::extract_text_from_mem(&bytes).with_context(|| {
            format!("Failed to extract text from base resume PDF '{}'", path.display())
        })?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read base resume '{}'", path.display()))?
    };

    if text.trim().is_empty() {
        bail!("Base resume '{}' contains no text", path.display());
    }

    info!(
        "Loaded base resume from {} ({} chars)",
        path.display(),
        text.len()
    );
    Ok(text)
}
