//! Infrastructure adapters. Implement ports.
//!
//! Gemini gateway (outbound) and the terminal UI (inbound). Map errors to DomainError.

pub mod ai;
pub mod ui;
