//! Gemini-backed implementation of the scoring capability.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::analysis::{BrandAnalysis, parse_analysis};
use crate::scorer::{BrandScorer, ScoreError, ScoreRequest};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const MODEL: &str = "gemini-1.5-flash";

/// Calls the Gemini `generateContent` endpoint with the brand rubric prompt.
#[derive(Debug, Clone)]
pub struct GeminiScorer {
    http: reqwest::Client,
    api_key: String,
}

impl GeminiScorer {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{API_BASE}/{MODEL}:generateContent?key={}", self.api_key)
    }
}

#[async_trait]
impl BrandScorer for GeminiScorer {
    async fn score(&self, request: &ScoreRequest) -> Result<BrandAnalysis, ScoreError> {
        let body = json!({
            "contents": [{
                "parts": [{ "text": build_prompt(request) }]
            }]
        });

        let response = self
            .http
            .post(self.endpoint())
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: GenerateContentResponse = response.json().await?;
        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| {
                ScoreError::MalformedResponse("no candidates in model response".to_string())
            })?;

        parse_analysis(&text)
    }
}

/// The fixed scoring rubric. The JSON shape and the recommendation thresholds
/// here are the wire contract that [`parse_analysis`] expects back.
fn build_prompt(request: &ScoreRequest) -> String {
    format!(
        r#"You are a brand consultant for COZIA, a cozy minimalist home goods store.

BRAND IDENTITY:
- Aesthetic: Cozy, warm, minimalist, simple, clean
- Tagline: "Thoughtfully Designed Home Essentials"
- Target: Home enthusiasts who value simplicity and warmth
- Colors: Cream, charcoal, sage green (neutral, calming palette)
- Vibe: Like a warm hug, hygge, peaceful home sanctuary

ANALYZE THIS PRODUCT:
Name: {name}
Category: {category}
Price: {price}
Images: {images}

SCORING (1-10 for each):
1. COZY FACTOR: Does it feel warm, inviting, comfortable?
2. MINIMALIST DESIGN: Is it simple, clean, not cluttered or busy?
3. HOME RELEVANCE: Is it useful for home/apartment living?
4. QUALITY PERCEPTION: Does it look premium, not cheap or tacky?
5. YEAR-ROUND APPEAL: Can it sell beyond one season?

RESPOND IN THIS EXACT JSON FORMAT:
{{
  "scores": {{
    "cozy": <1-10>,
    "minimalist": <1-10>,
    "home_relevance": <1-10>,
    "quality": <1-10>,
    "year_round": <1-10>
  }},
  "overall_score": <1-10>,
  "recommendation": "<APPROVE|REVIEW|REJECT>",
  "explanation_en": "<1-2 sentence explanation in English>",
  "explanation_kh": "<same explanation in Khmer>"
}}

RECOMMENDATION LOGIC:
- APPROVE: Overall score 7-10, fits brand well
- REVIEW: Overall score 5-6, might work with consideration
- REJECT: Overall score 1-4, does not fit brand
"#,
        name = request.name,
        category = request.category,
        price = request.recommended_price,
        images = request.images.join(", "),
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use provet_core::Cents;

    #[test]
    fn prompt_embeds_product_fields() {
        let prompt = build_prompt(&ScoreRequest {
            name: "Linen Throw".to_string(),
            category: "Textiles".to_string(),
            recommended_price: Cents::new(4499),
            images: vec!["https://img/1.jpg".to_string(), "https://img/2.jpg".to_string()],
        });
        assert!(prompt.contains("Name: Linen Throw"));
        assert!(prompt.contains("Price: $44.99"));
        assert!(prompt.contains("https://img/1.jpg, https://img/2.jpg"));
        assert!(prompt.contains("\"recommendation\": \"<APPROVE|REVIEW|REJECT>\""));
    }

    #[test]
    fn candidate_envelope_deserializes() {
        let raw = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"ok\":true}"}]}}
            ]
        }"#;
        let parsed: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.candidates[0].content.parts[0].text, "{\"ok\":true}");
    }

    #[test]
    fn empty_envelope_deserializes_to_no_candidates() {
        let parsed: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.candidates.is_empty());
    }
}
