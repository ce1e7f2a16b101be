// src/types/request.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /extract-text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractTextRequest {
    pub file_name: String,
    /// Base64 encoded document bytes.
    pub file_data: String,
}

/// Body of `POST /resume-gap-analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GapAnalysisRequest {
    pub job_description: String,
    pub resume_text: String,
}
