// src/workflow.rs
//! Upload-then-extract and validate-then-analyze flows over a `GapService`

use std::path::Path;
use tracing::{error, info, warn};

use crate::core::GapService;
use crate::document::UploadedDocument;
use crate::error::Result;
use crate::session::{ResumeSource, SessionInput};
use crate::types::AnalysisResult;

pub const EXTRACTION_NOTICE: &str = "📄 PDF/Word Data Extracted!";

/// Drives one session against the remote service.
///
/// Every remote operation takes `&mut self`, so at most one request is in
/// flight per workflow.
pub struct GapWorkflow<S> {
    service: S,
    session: SessionInput,
}

impl<S: GapService> GapWorkflow<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            session: SessionInput::new(),
        }
    }

    pub fn session(&self) -> &SessionInput {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionInput {
        &mut self.session
    }

    /// Pick a local document, extract its text remotely and adopt it as the resume.
    ///
    /// Returns the notice to show the user. On failure the session is untouched.
    pub async fn upload_resume(&mut self, path: &Path) -> Result<&'static str> {
        let document = UploadedDocument::from_path(path).await.map_err(|e| {
            warn!("Rejected document {}: {}", path.display(), e);
            e
        })?;
        self.upload_document(document).await
    }

    pub async fn upload_document(&mut self, document: UploadedDocument) -> Result<&'static str> {
        info!(
            "Uploading {} ({}) for extraction",
            document.file_name,
            document.kind.mime_type()
        );

        let text = self
            .service
            .extract_text(&document.to_request())
            .await
            .map_err(|e| {
                error!("Error sending file: {}", e);
                e
            })?;

        self.session.apply_extracted_text(&document.file_name, text);
        Ok(EXTRACTION_NOTICE)
    }

    /// Validate the session and request the gap analysis.
    pub async fn analyze(&mut self) -> Result<AnalysisResult> {
        let request = self.session.to_request()?;

        info!(
            "Sending resume gap analysis request (resume source: {})",
            self.session.resume_source.as_str()
        );

        let response = self.service.analyze_gap(&request).await.map_err(|e| {
            error!("Error analyzing resume gap: {}", e);
            e
        })?;

        let result = AnalysisResult::from(response);
        info!(
            "Analysis complete: {}% match, {} matching, {} missing",
            result.match_percentage,
            result.matching_skills.len(),
            result.missing_skills.len()
        );
        Ok(result)
    }

    /// Use typed text as the resume.
    pub fn paste_resume(&mut self, text: impl Into<String>) {
        self.session.set_resume_source(ResumeSource::Paste);
        self.session.set_resume_text(text);
    }
}
