// src/session.rs
use crate::error::{GapError, Result};
use crate::types::GapAnalysisRequest;

/// How the resume text was obtained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResumeSource {
    #[default]
    Upload,
    Paste,
}

impl ResumeSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Paste => "paste",
        }
    }
}

/// Inputs collected during one session. Never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionInput {
    pub job_description: String,
    pub resume_text: String,
    pub resume_source: ResumeSource,
    pub selected_file_name: Option<String>,
}

impl SessionInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    /// Typed or pasted resume text.
    pub fn set_resume_text(&mut self, text: impl Into<String>) {
        self.resume_text = text.into();
    }

    pub fn set_resume_source(&mut self, source: ResumeSource) {
        self.resume_source = source;
    }

    /// Replace the resume with text extracted from an uploaded document.
    pub fn apply_extracted_text(&mut self, file_name: &str, text: String) {
        self.selected_file_name = Some(file_name.to_string());
        self.resume_source = ResumeSource::Upload;
        self.resume_text = text;
    }

    pub fn validate(&self) -> Result<()> {
        if self.job_description.trim().is_empty() || self.resume_text.trim().is_empty() {
            return Err(GapError::missing_input());
        }
        Ok(())
    }

    /// Build the analysis request; fails without side effects when input is missing.
    pub fn to_request(&self) -> Result<GapAnalysisRequest> {
        self.validate()?;
        Ok(GapAnalysisRequest {
            job_description: self.job_description.clone(),
            resume_text: self.resume_text.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_source_is_upload() {
        let session = SessionInput::new();
        assert_eq!(session.resume_source, ResumeSource::Upload);
        assert!(session.selected_file_name.is_none());
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let mut session = SessionInput::new();
        session.set_job_description("Go developer");
        session.set_resume_text("   \n\t");
        let err = session.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        session.set_job_description("");
        session.set_resume_text("Python developer");
        assert!(session.validate().is_err());
    }

    #[test]
    fn test_request_keeps_untrimmed_text() {
        let mut session = SessionInput::new();
        session.set_resume_source(ResumeSource::Paste);
        session.set_job_description("  Go developer\n");
        session.set_resume_text("Python developer");
        let request = session.to_request().unwrap();
        assert_eq!(request.job_description, "  Go developer\n");
        assert_eq!(request.resume_text, "Python developer");
    }

    #[test]
    fn test_apply_extracted_text_switches_to_upload() {
        let mut session = SessionInput::new();
        session.set_resume_source(ResumeSource::Paste);
        session.set_resume_text("old");
        session.apply_extracted_text("cv.pdf", "new text".to_string());
        assert_eq!(session.resume_text, "new text");
        assert_eq!(session.resume_source, ResumeSource::Upload);
        assert_eq!(session.selected_file_name.as_deref(), Some("cv.pdf"));
    }
}
