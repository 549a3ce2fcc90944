//! Intake: turns a multipart screening form into a job description and a
//! numbered candidate list.
//!
//! Form fields:
//! - `jd_text`: pasted job description
//! - `jd_file`: job description document (wins over `jd_text` when it has text)
//! - `resumes`: one or more resume documents
//! - `resumes_text`: pasted resumes, separated by `---`

use axum::extract::multipart::{Field, Multipart};
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::{extract_document, ExtractedDocument, UploadedDocument};
use crate::models::candidate::{Candidate, CandidateSource, SkippedDocument};

/// Separator between pasted resumes.
pub const PASTED_RESUME_SEPARATOR: &str = "---";

/// Raw form contents, before any extraction.
#[derive(Debug, Default)]
pub struct ScreeningForm {
    pub jd_text: String,
    pub jd_file: Option<UploadedDocument>,
    pub resume_files: Vec<UploadedDocument>,
    pub resumes_text: String,
}

/// Everything the screener needs.
#[derive(Debug)]
pub struct ScreeningInput {
    pub job_description: String,
    pub candidates: Vec<Candidate>,
    pub skipped: Vec<SkippedDocument>,
}

pub async fn read_screening_form(mut multipart: Multipart) -> Result<ScreeningForm, AppError> {
    let mut form = ScreeningForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "jd_text" => form.jd_text = field.text().await?,
            "resumes_text" => form.resumes_text = field.text().await?,
            "jd_file" => form.jd_file = read_file_field(field).await?,
            "resumes" => {
                if let Some(upload) = read_file_field(field).await? {
                    form.resume_files.push(upload);
                }
            }
            other => debug!(field = other, "Ignoring unknown form field"),
        }
    }

    Ok(form)
}

/// Reads a file part. Browsers submit an untouched file input as a part with
/// an empty file name and no body; that counts as no file.
pub async fn read_file_field(field: Field<'_>) -> Result<Option<UploadedDocument>, AppError> {
    let file_name = field.file_name().unwrap_or_default().to_string();
    let data = field.bytes().await?;

    if file_name.is_empty() && data.is_empty() {
        return Ok(None);
    }

    Ok(Some(UploadedDocument {
        file_name: if file_name.is_empty() {
            "upload".to_string()
        } else {
            file_name
        },
        data,
    }))
}

/// Extracts every uploaded document and assembles the candidate list.
/// Any extraction failure aborts the whole screening.
pub async fn prepare_screening(form: ScreeningForm) -> Result<ScreeningInput, AppError> {
    let jd_file_text = match form.jd_file {
        Some(upload) => Some(extract_document(upload).await?.text),
        None => None,
    };
    let job_description = resolve_job_description(&form.jd_text, jd_file_text.as_deref());

    let mut extracted = Vec::with_capacity(form.resume_files.len());
    for upload in form.resume_files {
        extracted.push(extract_document(upload).await?);
    }

    let (candidates, skipped) = collect_candidates(extracted, &form.resumes_text);

    Ok(ScreeningInput {
        job_description,
        candidates,
        skipped,
    })
}

/// Text from an uploaded JD file overrides pasted text, unless the file is blank.
pub fn resolve_job_description(pasted: &str, file_text: Option<&str>) -> String {
    match file_text.map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => pasted.trim().to_string(),
    }
}

pub fn split_pasted_resumes(text: &str) -> Vec<String> {
    text.split(PASTED_RESUME_SEPARATOR)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Files first in upload order, then pasted resumes. Candidate IDs run 1..=N
/// over the final list.
pub fn collect_candidates(
    files: Vec<ExtractedDocument>,
    pasted: &str,
) -> (Vec<Candidate>, Vec<SkippedDocument>) {
    let mut candidates = Vec::new();
    let mut skipped = Vec::new();

    for document in files {
        let text = document.text.trim();
        if text.is_empty() {
            skipped.push(SkippedDocument {
                file_name: document.file_name,
                reason: "no extractable text".to_string(),
            });
            continue;
        }
        candidates.push(Candidate {
            id: candidates.len() + 1,
            source: CandidateSource::File {
                file_name: document.file_name.clone(),
            },
            text: text.to_string(),
        });
    }

    for (idx, text) in split_pasted_resumes(pasted).into_iter().enumerate() {
        candidates.push(Candidate {
            id: candidates.len() + 1,
            source: CandidateSource::Pasted { index: idx + 1 },
            text,
        });
    }

    (candidates, skipped)
}
