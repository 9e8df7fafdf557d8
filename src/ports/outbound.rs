//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{AnalysisResult, DomainError};

/// Generative-model gateway. Turns a channel or video URL into a full analysis.
#[async_trait::async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Analyze the channel or video at `url`.
    ///
    /// One outbound call per invocation. Any failure (transport, API status,
    /// empty text, malformed JSON) is reported as `DomainError::AnalysisFailed`.
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, DomainError>;
}
