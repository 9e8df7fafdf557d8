//! Domain entities. Pure data structures for the core business.
//!
//! Field names follow the model's JSON contract (camelCase) so the gateway can
//! deserialize the response text straight into these types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Full analysis of one channel or video, produced wholesale by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub niche: String,
    pub target_audience: String,
    pub channel_overview: String,
    pub competitors: Vec<Competitor>,
    pub winning_patterns: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// A rival channel with model-estimated performance attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    /// Human-readable estimate, e.g. "100k+".
    pub estimated_subscribers: String,
    pub avg_views_per_video: f64,
    pub strength: String,
    pub top_video_title: String,
    pub why_it_works: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub impact_level: ImpactLevel,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImpactLevel {
    High,
    Medium,
    Low,
}

impl ImpactLevel {
    pub const ALL: [ImpactLevel; 3] = [ImpactLevel::High, ImpactLevel::Medium, ImpactLevel::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            ImpactLevel::High => "High",
            ImpactLevel::Medium => "Medium",
            ImpactLevel::Low => "Low",
        }
    }
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Moderate,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
