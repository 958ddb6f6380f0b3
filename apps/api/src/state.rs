use crate::guidance::generator::GuidanceGenerator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Holds the model capability and the prompt contract.
    pub generator: GuidanceGenerator,
}
