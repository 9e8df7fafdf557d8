//! AI adapter module. Implements AnalysisGateway for Gemini.
//!
//! Provides the Gemini REST adapter, its response schema, and a mock gateway for testing.

pub mod gemini_adapter;
pub mod mock_adapter;
pub mod schema;

pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::{MockGateway, sample_analysis};
