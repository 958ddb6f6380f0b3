use thiserror::Error;

use crate::guidance::models::CareerInput;

/// Minimum length, in characters after trimming, of the experience description.
pub const MIN_EXPERIENCE_CHARS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Experience description is too short")]
    ExperienceTooShort,
}

/// Rejects requests too thin to be worth a model call.
pub fn validate_career_input(input: &CareerInput) -> Result<(), ValidationError> {
    if input.experience.trim().chars().count() < MIN_EXPERIENCE_CHARS {
        return Err(ValidationError::ExperienceTooShort);
    }
    Ok(())
}
