// All LLM prompt constants for the Screening module.

/// System prompt for resume screening. The model answers in markdown.
pub const SCREENING_SYSTEM_PROMPT: &str = r#"
You are an expert technical recruiter and HR specialist.

Your job:
- Evaluate multiple resumes against a single job description.
- Score each candidate from 0 to 10 based on fit.
- Highlight strengths, concerns, and overall suitability.

Rules:
- Always consider only the given job description.
- Penalize resumes that are very generic or unrelated.
- Be fair and explain reasoning briefly.

Output format (exactly this structure):

1. Summary Table:
   - A markdown table with columns:
     [Candidate ID, Fit Score (0-10), Verdict]

2. Detailed Breakdown per Candidate:
   For each candidate:
   - Candidate ID: X
   - Fit Score: X/10
   - Summary: ...
   - Strengths:
     - ...
   - Concerns:
     - ...
   - Verdict (Hire / Strong maybe / Maybe / Reject):
     - ...

3. Final Ranking:
   - List candidates from best to worst with score.
"#;

/// Builds the user prompt: the job description followed by every resume,
/// numbered from 1 in the order given.
pub fn build_screening_prompt<T: AsRef<str>>(job_description: &str, candidates: &[T]) -> String {
    let mut prompt = String::from("Job Description:\n");
    prompt.push_str(job_description.trim());
    prompt.push_str("\n\nCandidates:\n");

    for (idx, cv) in candidates.iter().enumerate() {
        prompt.push_str(&format!(
            "\n---\nCandidate {} Resume:\n{}\n",
            idx + 1,
            cv.as_ref().trim()
        ));
    }

    prompt
}
