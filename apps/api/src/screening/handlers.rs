//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::candidate::{CandidateSummary, SkippedDocument};
use crate::models::report::ScreeningReport;
use crate::screening::intake::{prepare_screening, read_screening_form};
use crate::screening::screener::run_screening;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ScreeningResponse {
    pub report_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub candidates: Vec<CandidateSummary>,
    pub skipped: Vec<SkippedDocument>,
    pub report_markdown: String,
}

/// What a screening would send to the model, without calling it.
#[derive(Debug, Serialize)]
pub struct ScreeningPreview {
    pub job_description_detected: bool,
    pub job_description_chars: usize,
    pub candidates: Vec<CandidateSummary>,
    pub skipped: Vec<SkippedDocument>,
}

async fn screen_form(state: &AppState, multipart: Multipart) -> Result<ScreeningReport, AppError> {
    let form = read_screening_form(multipart).await?;
    let input = prepare_screening(form).await?;
    run_screening(state.llm.as_ref(), input).await
}

/// POST /api/v1/screenings
///
/// Screens the uploaded resumes against the job description and returns the
/// rendered report alongside the candidate index.
pub async fn handle_screening(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let report = screen_form(&state, multipart).await?;
    let report_markdown = report.render_markdown();

    Ok(Json(ScreeningResponse {
        report_id: report.id,
        generated_at: report.generated_at,
        model: report.model,
        candidates: report.candidates,
        skipped: report.skipped,
        report_markdown,
    }))
}

/// POST /api/v1/screenings/download
///
/// Same input as `handle_screening`; responds with the report as a markdown attachment.
pub async fn handle_screening_download(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let report = screen_form(&state, multipart).await?;
    let disposition = format!("attachment; filename=\"{}\"", report.download_file_name());

    Ok((
        [
            (header::CONTENT_TYPE, "text/markdown; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        report.render_markdown(),
    )
        .into_response())
}

/// POST /api/v1/screenings/preview
///
/// Same input as `handle_screening`. Reports whether a job description was
/// found and which candidates were detected; the model is not called.
pub async fn handle_screening_preview(
    multipart: Multipart,
) -> Result<Json<ScreeningPreview>, AppError> {
    let form = read_screening_form(multipart).await?;
    let input = prepare_screening(form).await?;

    Ok(Json(ScreeningPreview {
        job_description_detected: !input.job_description.is_empty(),
        job_description_chars: input.job_description.chars().count(),
        candidates: input.candidates.iter().map(|c| c.summary()).collect(),
        skipped: input.skipped,
    }))
}
