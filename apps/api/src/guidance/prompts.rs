// Prompt constants for the guidance generator.

use std::sync::Arc;

/// System prompt sent with every guidance request. Enforces JSON-only output
/// in the exact shape `CareerOutput` decodes.
pub const CAREER_PROMPT_CONTRACT: &str = r#"You are a career preparation assistant.
Return ONLY valid JSON in this format:
{
  "resume_feedback": "...",
  "interview_questions": ["...", "..."],
  "learning_roadmap": ["...", "..."]
}
Do not include any extra text."#;

/// The fixed instruction handed to the model capability.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct PromptContract(Arc<str>);

impl PromptContract {
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PromptContract {
    fn default() -> Self {
        Self::new(CAREER_PROMPT_CONTRACT)
    }
}
