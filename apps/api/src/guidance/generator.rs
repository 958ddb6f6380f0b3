//! Guidance Generator — one model call per request, strictly parsed.
//!
//! Flow: serialize CareerInput → ModelCapability::complete with the prompt
//!       contract → CareerOutput::from_model_text.
//!
//! Single attempt. A reply that breaks the prompt contract is a failure,
//! not something to repair.

use std::sync::Arc;

use serde_json::json;
use thiserror::Error;
use tracing::{debug, info};

use crate::guidance::models::{CareerInput, CareerOutput, ParseError};
use crate::guidance::prompts::PromptContract;
use crate::llm_client::{LlmError, ModelCapability};

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("Model call failed: {0}")]
    Model(#[from] LlmError),

    #[error("{0}")]
    MalformedReply(#[from] ParseError),
}

/// Composes the prompt contract with a validated `CareerInput` and turns the
/// model's text into a `CareerOutput`.
#[derive(Clone)]
pub struct GuidanceGenerator {
    model: Arc<dyn ModelCapability>,
    contract: PromptContract,
}

impl GuidanceGenerator {
    pub fn new(model: Arc<dyn ModelCapability>, contract: PromptContract) -> Self {
        Self { model, contract }
    }

    /// Callers must run `validate_career_input` first.
    pub async fn generate(&self, input: &CareerInput) -> Result<CareerOutput, GenerationError> {
        let structured = json!({
            "role": input.role,
            "experience": input.experience,
            "goal": input.goal,
        });

        let raw = self
            .model
            .complete(&structured, self.contract.as_str())
            .await?;
        debug!("Model reply: {} chars", raw.chars().count());

        let output = CareerOutput::from_model_text(&raw)?;

        info!(
            "Generated guidance for role {:?}: {} interview questions, {} roadmap steps",
            input.role,
            output.interview_questions.len(),
            output.learning_roadmap.len()
        );

        Ok(output)
    }
}
