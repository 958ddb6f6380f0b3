// Career guidance: request validation, prompt contract, model call and
// strict parsing of the model's reply.
// All model calls go through llm_client::ModelCapability.

pub mod generator;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod validation;
