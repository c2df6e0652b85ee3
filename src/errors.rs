//! Error types for the analysis pipeline and provider layer.

use thiserror::Error;

/// Fatal pipeline errors. Empty results are not errors; they surface as a
/// [`RunStatus`](crate::models::session::RunStatus) on the session instead.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A paid stage was blocked because its estimate exceeds the ceiling.
    #[error("estimated cost ${estimated_usd:.4} exceeds the ${ceiling_usd:.2} cost limit")]
    BudgetExceeded {
        estimated_usd: f64,
        ceiling_usd: f64,
    },

    /// Rejected before any network call is attempted.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors from the external search-data provider. These never abort the
/// pipeline: the failing call contributes nothing and a notice is recorded.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}
