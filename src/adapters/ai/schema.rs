//! Gemini `responseSchema` for an analysis result.
//!
//! Uses Gemini's OpenAPI subset (upper-case type names). Mirrors the domain
//! entities field for field; every field is required.

use crate::domain::{Difficulty, ImpactLevel};
use serde_json::{Value, json};

/// Build the response schema sent in `generationConfig.responseSchema`.
pub fn analysis_response_schema() -> Value {
    let impact_levels: Vec<&str> = ImpactLevel::ALL.iter().map(|l| l.as_str()).collect();
    let difficulties: Vec<&str> = Difficulty::ALL.iter().map(|d| d.as_str()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "niche": { "type": "STRING", "description": "The specific content niche of the channel." },
            "targetAudience": { "type": "STRING", "description": "Description of the target audience." },
            "channelOverview": { "type": "STRING", "description": "A brief summary of the analyzed channel." },
            "competitors": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "estimatedSubscribers": { "type": "STRING", "description": "Estimated subscriber count (e.g. '100k+')." },
                        "avgViewsPerVideo": { "type": "NUMBER", "description": "Estimated average views per video as a raw number." },
                        "strength": { "type": "STRING", "description": "Key competitive advantage." },
                        "topVideoTitle": { "type": "STRING", "description": "Title of a high-performing video." },
                        "whyItWorks": { "type": "STRING", "description": "Brief analysis of why that video succeeded." }
                    },
                    "required": ["name", "estimatedSubscribers", "avgViewsPerVideo", "strength", "topVideoTitle", "whyItWorks"]
                }
            },
            "winningPatterns": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3-5 repeatable strategies observed in top videos."
            },
            "recommendations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "impactLevel": { "type": "STRING", "enum": impact_levels },
                        "difficulty": { "type": "STRING", "enum": difficulties }
                    },
                    "required": ["title", "description", "impactLevel", "difficulty"]
                }
            }
        },
        "required": ["niche", "targetAudience", "channelOverview", "competitors", "winningPatterns", "recommendations"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnalysisResult, Competitor, Recommendation};

    fn required(v: &Value) -> Vec<&str> {
        v["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s.as_str().unwrap())
            .collect()
    }

    #[test]
    fn test_top_level_required_matches_entity_fields() {
        let schema = analysis_response_schema();
        let sample = AnalysisResult {
            niche: String::new(),
            target_audience: String::new(),
            channel_overview: String::new(),
            competitors: vec![],
            winning_patterns: vec![],
            recommendations: vec![],
        };
        let json = serde_json::to_value(sample).unwrap();
        let mut fields: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        let mut req = required(&schema);
        fields.sort();
        req.sort();
        assert_eq!(fields, req);
    }

    #[test]
    fn test_competitor_required_matches_entity_fields() {
        let schema = analysis_response_schema();
        let item = &schema["properties"]["competitors"]["items"];
        let json = serde_json::to_value(Competitor {
            name: String::new(),
            estimated_subscribers: String::new(),
            avg_views_per_video: 0.0,
            strength: String::new(),
            top_video_title: String::new(),
            why_it_works: String::new(),
        })
        .unwrap();
        assert_eq!(required(item).len(), json.as_object().unwrap().len());
        assert_eq!(item["properties"]["avgViewsPerVideo"]["type"], "NUMBER");
    }

    #[test]
    fn test_recommendation_enums() {
        let schema = analysis_response_schema();
        let props = &schema["properties"]["recommendations"]["items"]["properties"];
        assert_eq!(props["impactLevel"]["enum"], json!(["High", "Medium", "Low"]));
        assert_eq!(props["difficulty"]["enum"], json!(["Easy", "Moderate", "Hard"]));

        let rec = serde_json::to_value(Recommendation {
            title: String::new(),
            description: String::new(),
            impact_level: ImpactLevel::Medium,
            difficulty: Difficulty::Hard,
        })
        .unwrap();
        assert_eq!(rec["impactLevel"], "Medium");
        assert_eq!(rec["difficulty"], "Hard");
    }
}
