use std::fmt;

use crate::models::report::ScreeningReport;

/// The downloadable markdown document: metadata, candidate index, then the
/// model's answer verbatim.
impl fmt::Display for ScreeningReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Resume Screening Report\n")?;
        writeln!(
            f,
            "- Generated: {}",
            self.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(f, "- Model: {}", self.model)?;
        writeln!(f, "- Candidates screened: {}", self.candidates.len())?;
        writeln!(f, "- Report ID: {}\n", self.id)?;

        writeln!(f, "## Candidates\n")?;
        for candidate in &self.candidates {
            writeln!(
                f,
                "- Candidate {}: `{}` ({} characters)",
                candidate.id, candidate.source, candidate.char_count
            )?;
        }
        writeln!(f)?;

        if !self.skipped.is_empty() {
            writeln!(f, "## Skipped files\n")?;
            for skipped in &self.skipped {
                writeln!(f, "- `{}`: {}", skipped.file_name, skipped.reason)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "---\n")?;
        writeln!(f, "{}", self.model_response.trim())
    }
}

impl ScreeningReport {
    pub fn render_markdown(&self) -> String {
        self.to_string()
    }

    pub fn download_file_name(&self) -> String {
        format!(
            "screening_report_{}.md",
            self.generated_at.format("%Y%m%d_%H%M%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::models::candidate::{CandidateSource, CandidateSummary, SkippedDocument};

    fn report(skipped: Vec<SkippedDocument>) -> ScreeningReport {
        ScreeningReport {
            id: Uuid::nil(),
            generated_at: Utc.with_ymd_and_hms(2025, 3, 4, 9, 5, 7).unwrap(),
            model: "gemini-2.0-flash".to_string(),
            candidates: vec![
                CandidateSummary {
                    id: 1,
                    source: CandidateSource::File {
                        file_name: "alice.pdf".to_string(),
                    },
                    char_count: 1200,
                },
                CandidateSummary {
                    id: 2,
                    source: CandidateSource::Pasted { index: 1 },
                    char_count: 300,
                },
            ],
            skipped,
            model_response: "\n## 1. Summary Table\n| Candidate ID | Fit Score (0-10) | Verdict |\n".to_string(),
        }
    }

    #[test]
    fn test_download_file_name_uses_timestamp() {
        assert_eq!(
            report(vec![]).download_file_name(),
            "screening_report_20250304_090507.md"
        );
    }

    #[test]
    fn test_render_includes_metadata_index_and_response() {
        let markdown = report(vec![]).render_markdown();

        assert!(markdown.starts_with("# Resume Screening Report\n"));
        assert!(markdown.contains("- Generated: 2025-03-04 09:05:07 UTC"));
        assert!(markdown.contains("- Model: gemini-2.0-flash"));
        assert!(markdown.contains("- Candidates screened: 2"));
        assert!(markdown.contains("- Candidate 1: `alice.pdf` (1200 characters)"));
        assert!(markdown.contains("- Candidate 2: `pasted resume #1`"));
        assert!(!markdown.contains("## Skipped files"));
        assert!(markdown.ends_with(
            "## 1. Summary Table\n| Candidate ID | Fit Score (0-10) | Verdict |\n"
        ));
    }

    #[test]
    fn test_render_lists_skipped_files() {
        let markdown = report(vec![SkippedDocument {
            file_name: "scan.pdf".to_string(),
            reason: "no extractable text".to_string(),
        }])
        .render_markdown();

        assert!(markdown.contains("## Skipped files\n\n- `scan.pdf`: no extractable text\n"));
    }
}
