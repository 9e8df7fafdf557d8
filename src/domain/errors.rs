//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

/// The one message a user ever sees for a failed analysis.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to analyze the YouTube link. Please ensure the URL is valid and try again.";

#[derive(Error, Debug)]
pub enum DomainError {
    /// Every gateway failure collapses into this variant. The cause stays
    /// reachable through `source()` for logs.
    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    AnalysisFailed(#[from] GatewayFailure),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Prompt error: {0}")]
    Ui(String),
}

/// Why a gateway call failed. Never shown to the user directly.
#[derive(Error, Debug)]
pub enum GatewayFailure {
    #[error("HTTP request failed: {0}")]
    Transport(String),

    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    #[error("No response generated from the model")]
    EmptyResponse,

    #[error("Failed to parse model JSON: {0}")]
    MalformedJson(String),
}
