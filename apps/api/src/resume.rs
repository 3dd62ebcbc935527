//! Résumé text extraction — flattens the résumé PDF into one plain-text blob.
//!
//! Extraction failures never abort a request: they are converted into
//! placeholder text that flows into the prompt like any other content.

use std::path::PathBuf;

use tracing::warn;

/// Placeholder used when the résumé file does not exist on disk.
pub const RESUME_MISSING: &str = "Error: Resume file not found.";

/// Seam for the résumé source. The production implementation is `PdfResume`;
/// tests substitute fixed text.
pub trait ResumeSource: Send + Sync {
    /// Returns the flattened résumé text, or placeholder text on failure.
    fn resume_text(&self) -> String;
}

/// Reads the résumé from a PDF file on every call. Nothing is cached.
pub struct PdfResume {
    path: PathBuf,
}

impl PdfResume {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResumeSource for PdfResume {
    fn resume_text(&self) -> String {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "resume file not found");
            return RESUME_MISSING.to_string();
        }

        match pdf_extract::extract_text(&self.path) {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "failed to read resume");
                format!("Error reading the resume: {e}")
            }
        }
    }
}
