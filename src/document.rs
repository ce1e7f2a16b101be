// src/document.rs
//! Resume document selection: type detection, reading and base64 payload

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::Path;
use tracing::debug;

use crate::error::{GapError, Result};
use crate::types::ExtractTextRequest;

/// Documents larger than this are rejected before upload.
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    pub const ALLOWED_EXTENSIONS: [&'static str; 3] = ["pdf", "doc", "docx"];

    pub fn from_file_name(file_name: &str) -> Result<Self> {
        match get_file_extension(file_name).as_deref() {
            Some("pdf") => Ok(Self::Pdf),
            Some("doc") => Ok(Self::Doc),
            Some("docx") => Ok(Self::Docx),
            Some(ext) => Err(GapError::UnsupportedDocument(format!(
                "{} (extension '{}', allowed: {:?})",
                file_name,
                ext,
                Self::ALLOWED_EXTENSIONS
            ))),
            None => Err(GapError::UnsupportedDocument(format!(
                "{} has no extension",
                file_name
            ))),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }
}

/// A document ready to be sent to the extraction endpoint.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub file_data: String,
}

impl UploadedDocument {
    pub fn from_bytes(file_name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let file_name = file_name.into();
        let kind = DocumentKind::from_file_name(&file_name)?;

        check_size(&file_name, bytes.len() as u64)?;

        Ok(Self {
            file_name,
            kind,
            file_data: STANDARD.encode(bytes),
        })
    }

    pub async fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| GapError::UnsupportedDocument(path.display().to_string()))?
            .to_string();

        // Reject by extension before touching the file.
        DocumentKind::from_file_name(&file_name)?;

        let metadata = tokio::fs::metadata(path)
            .await
            .map_err(|e| GapError::Document {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        check_size(&file_name, metadata.len())?;

        let bytes = tokio::fs::read(path).await.map_err(|e| GapError::Document {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Self::from_bytes(file_name, &bytes)
    }

    pub fn to_request(&self) -> ExtractTextRequest {
        ExtractTextRequest {
            file_name: self.file_name.clone(),
            file_data: self.file_data.clone(),
        }
    }
}

/// Reject empty documents and documents over `MAX_DOCUMENT_SIZE`.
fn check_size(file_name: &str, len: u64) -> Result<()> {
    if len == 0 {
        return Err(GapError::Document {
            path: file_name.to_string(),
            message: "file is empty".to_string(),
        });
    }
    if len > MAX_DOCUMENT_SIZE {
        return Err(GapError::Document {
            path: file_name.to_string(),
            message: format!(
                "file too large: {} bytes (max {} bytes)",
                len, MAX_DOCUMENT_SIZE
            ),
        });
    }
    Ok(())
}

/// Get file extension in lowercase
pub fn get_file_extension(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
