//! Gemini adapter for channel analysis.
//!
//! Calls `models/{model}:generateContent` with Google Search grounding and a
//! strict JSON response schema. Implements `AnalysisGateway`.

use super::schema::analysis_response_schema;
use crate::domain::{AnalysisResult, DomainError, GatewayFailure};
use crate::ports::AnalysisGateway;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

/// Gemini REST adapter.
///
/// `api_base` is normally `https://generativelanguage.googleapis.com/v1beta`;
/// tests point it at a local mock server.
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_base` - REST base URL without trailing slash
    /// * `api_key` - Gemini API key, sent as `x-goog-api-key`
    /// * `model` - Model name (e.g., "gemini-3-pro-preview")
    pub fn new(api_base: String, api_key: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base,
            api_key,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    /// Build the analysis instruction for one URL.
    fn analysis_prompt(url: &str) -> String {
        format!(
            r#"Analyze the YouTube channel or video at this URL: {url}.

Your task is to:
1. Identify the specific content niche.
2. Identify 3-5 top competitors in this niche.
3. Estimate their performance metrics based on public knowledge.
4. Analyze why their top videos perform well.
5. Extract repeatable patterns.
6. Provide actionable recommendations for a creator in this niche to outperform them.

Use Google Search to find real, up-to-date information about the channel and its competitors."#
        )
    }

    fn build_request(url: &str) -> GenerateRequest {
        GenerateRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: Self::analysis_prompt(url),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: analysis_response_schema(),
            },
        }
    }

    /// Sanitize JSON response from the model.
    ///
    /// Grounded responses occasionally come back wrapped in a markdown code block.
    fn sanitize_json(raw_text: &str) -> &str {
        let trimmed = raw_text.trim();
        let Some(rest) = trimmed.strip_prefix("```") else {
            return trimmed;
        };
        let rest = rest.strip_prefix("json").unwrap_or(rest);
        match rest.rfind("```") {
            Some(end) => rest[..end].trim(),
            None => rest.trim(),
        }
    }

    async fn call(&self, url: &str) -> Result<AnalysisResult, GatewayFailure> {
        let request = Self::build_request(url);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GatewayFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayFailure::Api {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let generated: GenerateResponse = response
            .json()
            .await
            .map_err(|e| GatewayFailure::MalformedJson(format!("envelope: {}", e)))?;

        let text = generated.text();
        if text.trim().is_empty() {
            return Err(GatewayFailure::EmptyResponse);
        }
        debug!(raw_len = text.len(), "received model response");

        let clean_json = Self::sanitize_json(&text);
        serde_json::from_str(clean_json).map_err(|e| GatewayFailure::MalformedJson(e.to_string()))
    }
}

/// `generateContent` request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Serialize)]
struct GoogleSearch {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

/// `generateContent` response body. Only the parts we read.
#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

#[async_trait::async_trait]
impl AnalysisGateway for GeminiAdapter {
    async fn analyze(&self, url: &str) -> Result<AnalysisResult, DomainError> {
        info!(url = %url, model = %self.model, "sending URL to Gemini for analysis");

        match self.call(url).await {
            Ok(result) => {
                info!(
                    niche = %result.niche,
                    competitors = result.competitors.len(),
                    patterns = result.winning_patterns.len(),
                    recommendations = result.recommendations.len(),
                    "analysis complete"
                );
                Ok(result)
            }
            Err(failure) => {
                error!(url = %url, error = %failure, "analysis failed");
                Err(DomainError::AnalysisFailed(failure))
            }
        }
    }
}
