use axum::{extract::Multipart, Json};

use crate::errors::AppError;
use crate::extraction::{extract_document, ExtractedDocument};
use crate::screening::intake::read_file_field;

/// POST /api/v1/documents/extract
///
/// Extracts the text of a single uploaded `file` so callers can preview what
/// a screening will see before running it.
pub async fn handle_extract(mut multipart: Multipart) -> Result<Json<ExtractedDocument>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        if let Some(upload) = read_file_field(field).await? {
            return Ok(Json(extract_document(upload).await?));
        }
    }

    Err(AppError::Validation(
        "Upload a document in the 'file' field".to_string(),
    ))
}
