//! Document text extraction for job descriptions and resumes.
//!
//! Supported: PDF (`pdf-extract`), DOCX (`zip` + `quick-xml`), plain text.
//! Anything else is decoded as UTF-8 on a best-effort basis.

pub mod docx;
pub mod handlers;
pub mod pdf;

use bytes::Bytes;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Could not read PDF '{file_name}': {message}")]
    Pdf { file_name: String, message: String },

    #[error("Could not read DOCX '{file_name}': {message}")]
    Docx { file_name: String, message: String },

    #[error("Extraction worker failed: {0}")]
    Worker(String),
}

/// Document format, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    PlainText,
    /// Legacy `.doc` and anything unrecognised.
    Unknown,
}

impl DocumentFormat {
    pub fn from_file_name(file_name: &str) -> Self {
        let name = file_name.to_ascii_lowercase();
        if name.ends_with(".pdf") {
            DocumentFormat::Pdf
        } else if name.ends_with(".docx") {
            DocumentFormat::Docx
        } else if name.ends_with(".txt") {
            DocumentFormat::PlainText
        } else {
            DocumentFormat::Unknown
        }
    }
}

/// A file as received from a multipart upload.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub data: Bytes,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExtractedDocument {
    pub file_name: String,
    pub format: DocumentFormat,
    pub text: String,
    pub char_count: usize,
}

/// Extracts plain text from a document, dispatching on its file name.
pub fn extract_text(file_name: &str, data: &[u8]) -> Result<String, ExtractionError> {
    match DocumentFormat::from_file_name(file_name) {
        DocumentFormat::Pdf => pdf::extract_pdf_text(data).map_err(|e| ExtractionError::Pdf {
            file_name: file_name.to_string(),
            message: e.to_string(),
        }),
        DocumentFormat::Docx => {
            docx::extract_docx_text(data).map_err(|e| ExtractionError::Docx {
                file_name: file_name.to_string(),
                message: e.to_string(),
            })
        }
        DocumentFormat::PlainText | DocumentFormat::Unknown => Ok(decode_text(data)),
    }
}

/// Runs extraction on the blocking pool; PDF parsing is CPU-bound.
pub async fn extract_document(
    upload: UploadedDocument,
) -> Result<ExtractedDocument, ExtractionError> {
    let UploadedDocument { file_name, data } = upload;
    let format = DocumentFormat::from_file_name(&file_name);

    let (file_name, text) = tokio::task::spawn_blocking(move || {
        let text = extract_text(&file_name, &data);
        (file_name, text)
    })
    .await
    .map_err(|e| ExtractionError::Worker(e.to_string()))?;
    let text = text?;

    let char_count = text.chars().count();
    if text.trim().is_empty() {
        warn!(file_name = %file_name, ?format, "No text extracted from document");
    } else {
        debug!(file_name = %file_name, ?format, char_count, "Extracted document text");
    }

    Ok(ExtractedDocument {
        file_name,
        format,
        text,
        char_count,
    })
}

/// Best-effort UTF-8 decode: invalid byte sequences and a leading BOM are dropped.
pub fn decode_text(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len());
    for chunk in data.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    match out.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => out,
    }
}
