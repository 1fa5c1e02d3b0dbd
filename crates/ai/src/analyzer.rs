//! Failure-absorbing wrapper around the scoring capability.

use std::sync::Arc;

use crate::analysis::BrandAnalysis;
use crate::gemini::GeminiScorer;
use crate::scorer::{BrandScorer, ScoreRequest};

/// Stand-in image reference when the submitter provided none.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x600?text=no+image";

/// Brand-fit analysis step of the submission pipeline.
///
/// Holds the scoring capability decided at construction time; there is no
/// env lookup at call time, which keeps the analyzer testable with a fake
/// scorer. Every failure mode maps to "no analysis" — the caller treats
/// absence as an ordinary outcome and never sees an error from here.
#[derive(Clone)]
pub struct BrandFitAnalyzer {
    scorer: Option<Arc<dyn BrandScorer>>,
}

impl BrandFitAnalyzer {
    pub fn new(scorer: Option<Arc<dyn BrandScorer>>) -> Self {
        Self { scorer }
    }

    /// Analyzer with no scoring capability; always returns "no analysis".
    pub fn disabled() -> Self {
        Self { scorer: None }
    }

    /// Wire up the Gemini backend when a credential is configured.
    pub fn from_gemini_key(api_key: Option<String>) -> Self {
        match api_key {
            Some(key) if !key.trim().is_empty() => {
                Self::new(Some(Arc::new(GeminiScorer::new(key))))
            }
            _ => Self::disabled(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.scorer.is_some()
    }

    /// Score a candidate product, degrading to `None` on any failure.
    ///
    /// Single shot: no retries, no timeout at this layer.
    pub async fn analyze(&self, mut request: ScoreRequest) -> Option<BrandAnalysis> {
        let Some(scorer) = &self.scorer else {
            tracing::warn!(
                product = %request.name,
                "no scoring credential configured; skipping brand-fit analysis"
            );
            return None;
        };

        if request.images.is_empty() {
            request.images.push(PLACEHOLDER_IMAGE.to_string());
        }

        match scorer.score(&request).await {
            Ok(analysis) => Some(analysis),
            Err(error) => {
                tracing::warn!(
                    product = %request.name,
                    %error,
                    "brand-fit analysis failed; continuing without analysis"
                );
                None
            }
        }
    }
}

impl core::fmt::Debug for BrandFitAnalyzer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BrandFitAnalyzer")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
