//! The external scoring capability boundary.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use provet_core::Cents;

use crate::analysis::BrandAnalysis;

/// Product metadata sent to the scoring backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub name: String,
    pub category: String,
    pub recommended_price: Cents,
    pub images: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("scoring request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("malformed scoring response: {0}")]
    MalformedResponse(String),

    #[error("score out of range: {0}")]
    OutOfRange(String),
}

/// A single-shot brand-fit scoring capability.
///
/// Implementations perform one request/response exchange; no retries, no
/// timeout policy of their own. Callers absorb failures (see
/// [`crate::analyzer::BrandFitAnalyzer`]).
#[async_trait]
pub trait BrandScorer: Send + Sync + 'static {
    async fn score(&self, request: &ScoreRequest) -> Result<BrandAnalysis, ScoreError>;
}
