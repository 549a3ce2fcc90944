use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::candidate::{CandidateSummary, SkippedDocument};

/// Result of one screening run. Lives only for the request that produced it.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub model: String,
    pub candidates: Vec<CandidateSummary>,
    pub skipped: Vec<SkippedDocument>,
    /// Free-form markdown returned by the model, untouched.
    pub model_response: String,
}
