//! Core domain layer. No external I/O dependencies.
//!
//! Entities, errors and the session view state live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod state;

pub use entities::{AnalysisResult, Competitor, Difficulty, ImpactLevel, Recommendation};
pub use errors::{ANALYSIS_FAILED_MESSAGE, DomainError, GatewayFailure};
pub use state::{AnalysisState, View};
