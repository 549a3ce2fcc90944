// Resume screening: form intake, prompt assembly, model call, report rendering.
// All LLM calls go through llm_client, never direct Gemini calls here.

pub mod handlers;
pub mod intake;
pub mod prompts;
pub mod report;
pub mod screener;
