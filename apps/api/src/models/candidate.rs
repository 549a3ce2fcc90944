use std::fmt;

use serde::Serialize;

/// Where a candidate's resume text came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CandidateSource {
    File { file_name: String },
    /// 1-based position among the pasted resumes.
    Pasted { index: usize },
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateSource::File { file_name } => write!(f, "{file_name}"),
            CandidateSource::Pasted { index } => write!(f, "pasted resume #{index}"),
        }
    }
}

/// A resume ready to be screened. `id` is the Candidate ID the model sees.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub id: usize,
    pub source: CandidateSource,
    pub text: String,
}

impl Candidate {
    pub fn summary(&self) -> CandidateSummary {
        CandidateSummary {
            id: self.id,
            source: self.source.clone(),
            char_count: self.text.chars().count(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidateSummary {
    pub id: usize,
    pub source: CandidateSource,
    pub char_count: usize,
}

/// An uploaded resume that produced no usable text.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedDocument {
    pub file_name: String,
    pub reason: String,
}
