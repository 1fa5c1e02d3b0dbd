//! Brand-fit analysis result shape and response parsing.

use serde::{Deserialize, Serialize};

use crate::scorer::ScoreError;

/// The five rubric dimensions, each scored 1-10 by the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandScores {
    pub cozy: u8,
    pub minimalist: u8,
    pub home_relevance: u8,
    pub quality: u8,
    pub year_round: u8,
}

impl BrandScores {
    fn all(&self) -> [(&'static str, u8); 5] {
        [
            ("cozy", self.cozy),
            ("minimalist", self.minimalist),
            ("home_relevance", self.home_relevance),
            ("quality", self.quality),
            ("year_round", self.year_round),
        ]
    }
}

/// Categorical verdict returned by the model.
///
/// Thresholds (part of the prompt contract): 7-10 approve, 5-6 review,
/// 1-4 reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Recommendation {
    Approve,
    Review,
    Reject,
}

/// Parsed brand-fit analysis for one candidate product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandAnalysis {
    pub scores: BrandScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub explanation_en: String,
    pub explanation_kh: String,
}

impl BrandAnalysis {
    /// Range-check every score. Models occasionally wander outside the
    /// rubric; treat that as a malformed response rather than trusting it.
    pub fn validate(&self) -> Result<(), ScoreError> {
        for (label, value) in self.scores.all() {
            if !(1..=10).contains(&value) {
                return Err(ScoreError::OutOfRange(format!(
                    "{label} score {value} outside 1-10"
                )));
            }
        }
        if !(1..=10).contains(&self.overall_score) {
            return Err(ScoreError::OutOfRange(format!(
                "overall score {} outside 1-10",
                self.overall_score
            )));
        }
        Ok(())
    }
}

/// Parse the model's reply text into a validated [`BrandAnalysis`].
///
/// Models wrap JSON in markdown code fences more often than not; strip them
/// before parsing.
pub fn parse_analysis(text: &str) -> Result<BrandAnalysis, ScoreError> {
    let json = strip_code_fences(text);
    let analysis: BrandAnalysis = serde_json::from_str(json)
        .map_err(|e| ScoreError::MalformedResponse(format!("response is not rubric JSON: {e}")))?;
    analysis.validate()?;
    Ok(analysis)
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}
