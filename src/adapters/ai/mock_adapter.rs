//! Mock gateway for testing without API calls.
//!
//! Returns a scripted outcome and counts invocations. An optional gate holds
//! each call open until released, so callers can observe the loading state.

use crate::domain::{
    AnalysisResult, Competitor, Difficulty, DomainError, GatewayFailure, ImpactLevel,
    Recommendation,
};
use crate::ports::AnalysisGateway;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::info;

enum Outcome {
    Success(AnalysisResult),
    Failure,
}

/// Mock analysis gateway.
pub struct MockGateway {
    outcome: Outcome,
    delay_ms: u64,
    calls: AtomicUsize,
    gate: Option<Arc<Semaphore>>,
}

impl MockGateway {
    /// Always returns `result`.
    pub fn succeeding(result: AnalysisResult) -> Self {
        Self::with_outcome(Outcome::Success(result))
    }

    /// Always fails as if the model returned no text.
    pub fn failing() -> Self {
        Self::with_outcome(Outcome::Failure)
    }

    fn with_outcome(outcome: Outcome) -> Self {
        Self {
            outcome,
            delay_ms: 0,
            calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    /// Simulated network delay.
    pub fn with_delay(mut self, delay_ms: u64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Hold every call until a permit is added to `gate`.
    pub fn with_gate(mut self, gate: Arc<Semaphore>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Number of `analyze` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl AnalysisGateway for MockGateway {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        info!(url = %url, "[MOCK] Simulating analysis");

        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }

        match &self.outcome {
            Outcome::Success(result) => Ok(result.clone()),
            Outcome::Failure => Err(DomainError::AnalysisFailed(GatewayFailure::EmptyResponse)),
        }
    }
}

/// A fixed "Retro Gaming" analysis with three competitors at
/// 120000, 95000 and 60000 average views.
pub fn sample_analysis() -> AnalysisResult {
    let competitor = |name: &str, subs: &str, views: f64, title: &str| Competitor {
        name: name.to_string(),
        estimated_subscribers: subs.to_string(),
        avg_views_per_video: views,
        strength: format!("{} has a loyal community", name),
        top_video_title: title.to_string(),
        why_it_works: "Nostalgia hook in the first five seconds".to_string(),
    };

    AnalysisResult {
        niche: "Retro Gaming".to_string(),
        target_audience: "Adults who grew up with 8- and 16-bit consoles".to_string(),
        channel_overview: "Longform retrospectives and hardware restorations.".to_string(),
        competitors: vec![
            competitor("Pixel Archive", "1.2M", 120000.0, "Why the SNES Won"),
            competitor("Cartridge Club", "800k+", 95000.0, "Restoring a Yellowed Game Boy"),
            competitor("Bit Legends", "450k", 60000.0, "Every Mario Kart Ranked"),
        ],
        winning_patterns: vec![
            "Before/after restoration thumbnails".to_string(),
            "Ranked list titles".to_string(),
            "Chaptered deep dives over 20 minutes".to_string(),
        ],
        recommendations: vec![
            Recommendation {
                title: "Tighten the cold open".to_string(),
                description: "Show the finished restoration within 10 seconds.".to_string(),
                impact_level: ImpactLevel::High,
                difficulty: Difficulty::Easy,
            },
            Recommendation {
                title: "Launch a ranked series".to_string(),
                description: "Monthly 'every game ranked' episodes.".to_string(),
                impact_level: ImpactLevel::Medium,
                difficulty: Difficulty::Moderate,
            },
            Recommendation {
                title: "Collab with a hardware modder".to_string(),
                description: "Cross-post a joint build video.".to_string(),
                impact_level: ImpactLevel::Low,
                difficulty: Difficulty::Hard,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_gateway_success() {
        let gateway = MockGateway::succeeding(sample_analysis()).with_delay(10);
        let result = gateway.analyze("https://youtube.com/@x").await.unwrap();
        assert_eq!(result.niche, "Retro Gaming");
        assert_eq!(result.competitors.len(), 3);
        assert_eq!(gateway.calls(), 1);
    }

    #[tokio::test]
    async fn test_mock_gateway_failure() {
        let gateway = MockGateway::failing();
        let err = gateway.analyze("u").await.unwrap_err();
        assert!(matches!(err, DomainError::AnalysisFailed(_)));
        assert_eq!(gateway.calls(), 1);
    }
}
