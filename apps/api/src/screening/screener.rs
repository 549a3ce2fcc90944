//! Screener: sends the job description and all candidates to the model in one
//! prompt and wraps the answer in a `ScreeningReport`.
//!
//! All LLM calls go through `TextGenerator`; ranking and scoring are the model's.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::TextGenerator;
use crate::models::report::ScreeningReport;
use crate::screening::intake::ScreeningInput;
use crate::screening::prompts::{build_screening_prompt, SCREENING_SYSTEM_PROMPT};

#[instrument(skip_all, fields(candidates = input.candidates.len()))]
pub async fn run_screening(
    llm: &dyn TextGenerator,
    input: ScreeningInput,
) -> Result<ScreeningReport, AppError> {
    if input.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "No job description provided. Paste it in 'jd_text' or upload 'jd_file'.".to_string(),
        ));
    }

    if input.candidates.is_empty() {
        let mut message =
            "No candidate resumes detected. Upload files in 'resumes' or paste text in 'resumes_text'."
                .to_string();
        if !input.skipped.is_empty() {
            message.push_str(&format!(
                " {} uploaded file(s) contained no extractable text.",
                input.skipped.len()
            ));
        }
        return Err(AppError::Validation(message));
    }

    let texts: Vec<&str> = input.candidates.iter().map(|c| c.text.as_str()).collect();
    let prompt = build_screening_prompt(&input.job_description, &texts);

    let model_response = llm.generate(SCREENING_SYSTEM_PROMPT, &prompt).await?;

    let report = ScreeningReport {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        model: llm.model().to_string(),
        candidates: input.candidates.iter().map(|c| c.summary()).collect(),
        skipped: input.skipped,
        model_response,
    };

    info!(
        report_id = %report.id,
        candidates = report.candidates.len(),
        "Screening complete"
    );

    Ok(report)
}
