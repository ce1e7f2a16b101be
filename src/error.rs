// src/error.rs
use thiserror::Error;

pub const MISSING_INPUT_ALERT: &str = "Please enter both job description and resume.";
pub const EXTRACTION_FAILED_ALERT: &str = "Failed to extract text. Check API logs.";
pub const ANALYSIS_FAILED_ALERT: &str = "Failed to analyze resume gap. Please check API logs.";

/// Which remote operation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Extract,
    Analyze,
}

/// Coarse classification used to decide how a failure is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing required input; nothing was sent.
    Validation,
    /// Network, status, parse or local document failure.
    Failure,
}

#[derive(Debug, Error)]
pub enum GapError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unsupported document: {0}")]
    UnsupportedDocument(String),

    #[error("Failed to read document {path}: {message}")]
    Document { path: String, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service error (status {status}): {message}")]
    Service { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response is missing field '{0}'")]
    MissingField(&'static str),
}

impl GapError {
    pub fn missing_input() -> Self {
        Self::Validation(MISSING_INPUT_ALERT.to_string())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Validation(_) => ErrorKind::Validation,
            _ => ErrorKind::Failure,
        }
    }

    /// The blocking message shown to the user for this error.
    pub fn alert(&self, operation: Operation) -> &'static str {
        match (self.kind(), operation) {
            (ErrorKind::Validation, _) => MISSING_INPUT_ALERT,
            (ErrorKind::Failure, Operation::Extract) => EXTRACTION_FAILED_ALERT,
            (ErrorKind::Failure, Operation::Analyze) => ANALYSIS_FAILED_ALERT,
        }
    }
}

pub type Result<T, E = GapError> = std::result::Result<T, E>;
