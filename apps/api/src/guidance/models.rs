use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A caller's career profile, taken straight from the `POST /generate` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInput {
    pub role: String,
    pub experience: String,
    pub goal: String,
}

/// Structured guidance returned to the caller.
///
/// Only ever built by `CareerOutput::from_model_text`. Unknown fields are
/// rejected so a reply that drifts from the prompt contract never passes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerOutput {
    pub resume_feedback: String,
    pub interview_questions: Vec<String>,
    pub learning_roadmap: Vec<String>,
}

/// The model's reply did not decode as a `CareerOutput`.
#[derive(Debug, Error)]
#[error("Model reply is not a valid CareerOutput: {0}")]
pub struct ParseError(#[from] serde_json::Error);

impl CareerOutput {
    /// Decodes the model's raw text. No repair is attempted: code fences,
    /// surrounding prose or a partial object all fail.
    pub fn from_model_text(raw: &str) -> Result<Self, ParseError> {
        Ok(serde_json::from_str(raw)?)
    }
}
