//! niche-navigator: YouTube niche and competitor analysis from Gemini, with Hexagonal Architecture.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
