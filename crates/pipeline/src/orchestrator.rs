//! Submission orchestrator.
//!
//! Sequences duplicate detection, admission validation, brand-fit analysis
//! and the final status decision. Terminal blocked states persist nothing; a
//! similar-duplicate block is retried by resubmitting with the override flag,
//! which restarts the whole pipeline.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use provet_ai::{BrandAnalysis, BrandFitAnalyzer, Recommendation, ScoreRequest};
use provet_catalog::{
    DuplicateVerdict, ProductDraft, ProductStatus, ProductSummary, ValidationResult,
    classify_duplicate,
};
use provet_core::DomainError;
use provet_store::{ProductRecord, ProductStore, StoreError};

use crate::quote::quote;

/// Pipeline phases, in order. Logged per transition for traceability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionState {
    CheckingDuplicate,
    Validating,
    AnalyzingBrand,
    Deciding,
    Persisted,
}

/// Terminal result of one submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The record was admitted and persisted.
    Persisted(ProductRecord),
    /// Hard block: an existing record has the same source URL.
    BlockedExactDuplicate(ProductSummary),
    /// Soft block: a similar name exists and no override was given.
    BlockedSimilarPending(ProductSummary),
    /// Admission rules failed; reasons surfaced to the caller.
    BlockedValidationFailed(ValidationResult),
}

#[derive(Debug, Error)]
pub enum SubmitError {
    /// Malformed draft (empty name/URL, inverted day range, ...).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The store rejected the final create. No automatic retry.
    #[error("persistence failed: {0}")]
    Persistence(String),
}

/// Map the AI recommendation (or its absence) to a lifecycle status.
///
/// Passing validation is necessary but never sufficient for auto-approval:
/// absent analysis always lands in `review`.
pub fn decide_status(analysis: Option<&BrandAnalysis>) -> ProductStatus {
    match analysis.map(|a| a.recommendation) {
        Some(Recommendation::Approve) => ProductStatus::Approved,
        Some(Recommendation::Reject) => ProductStatus::Rejected,
        Some(Recommendation::Review) | None => ProductStatus::Review,
    }
}

/// Runs the full submission pipeline against a store and an analyzer.
#[derive(Debug, Clone)]
pub struct SubmissionOrchestrator<S> {
    store: Arc<S>,
    analyzer: BrandFitAnalyzer,
}

impl<S: ProductStore> SubmissionOrchestrator<S> {
    pub fn new(store: Arc<S>, analyzer: BrandFitAnalyzer) -> Self {
        Self { store, analyzer }
    }

    /// Evaluate one submission attempt start to finish.
    ///
    /// Sequential: no step begins before the previous one completes, and the
    /// final create is the only side effect. The duplicate check reads a
    /// snapshot at call time; a race between two concurrent submissions of
    /// the same URL is accepted rather than locked against.
    pub async fn submit(
        &self,
        draft: ProductDraft,
        override_similar: bool,
    ) -> Result<SubmissionOutcome, SubmitError> {
        draft.validate()?;

        tracing::debug!(
            state = ?SubmissionState::CheckingDuplicate,
            product = %draft.name,
            "submission started"
        );
        match self.check_duplicate(&draft.source_url, &draft.name) {
            DuplicateVerdict::Exact(existing) => {
                tracing::info!(
                    product = %draft.name,
                    existing = %existing.id,
                    "blocked: exact duplicate"
                );
                return Ok(SubmissionOutcome::BlockedExactDuplicate(existing));
            }
            DuplicateVerdict::Similar(existing) if !override_similar => {
                tracing::info!(
                    product = %draft.name,
                    existing = %existing.id,
                    "blocked: similar duplicate pending override"
                );
                return Ok(SubmissionOutcome::BlockedSimilarPending(existing));
            }
            _ => {}
        }

        tracing::debug!(
            state = ?SubmissionState::Validating,
            product = %draft.name,
            "running admission rules"
        );
        let derived = quote(&draft);
        if !derived.validation.passed {
            tracing::info!(
                product = %draft.name,
                reasons = ?derived.validation.reasons,
                "blocked: validation failed"
            );
            return Ok(SubmissionOutcome::BlockedValidationFailed(derived.validation));
        }

        tracing::debug!(
            state = ?SubmissionState::AnalyzingBrand,
            product = %draft.name,
            "requesting brand-fit analysis"
        );
        let analysis = self
            .analyzer
            .analyze(ScoreRequest {
                name: draft.name.clone(),
                category: draft.category.clone(),
                recommended_price: derived.pricing.recommended_price,
                images: draft.images.clone(),
            })
            .await;

        tracing::debug!(
            state = ?SubmissionState::Deciding,
            product = %draft.name,
            has_analysis = analysis.is_some(),
            "deciding status"
        );
        let status = decide_status(analysis.as_ref());

        let record = ProductRecord::assemble(
            draft,
            derived.pricing,
            derived.shipping,
            derived.validation,
            analysis,
            status,
            Utc::now(),
        );

        let record = self
            .store
            .create(record)
            .map_err(|e| SubmitError::Persistence(e.to_string()))?;
        tracing::debug!(
            state = ?SubmissionState::Persisted,
            id = %record.id,
            status = record.status.as_str(),
            "record persisted"
        );

        Ok(SubmissionOutcome::Persisted(record))
    }

    /// Classify a candidate URL/name against the current catalog snapshot.
    ///
    /// Also the backing for live duplicate feedback on the form. Read
    /// failures degrade to a clear verdict: the submission proceeds and the
    /// create either succeeds or surfaces a persistence error.
    pub fn check_duplicate(&self, url: &str, name: &str) -> DuplicateVerdict {
        match self.store.find_by_url(url) {
            Ok(Some(existing)) => return DuplicateVerdict::Exact(existing),
            Ok(None) => {}
            Err(error) => {
                warn_lookup_degraded(&error);
                return DuplicateVerdict::None;
            }
        }

        match self.store.list_summaries() {
            Ok(summaries) => classify_duplicate(url, name, &summaries),
            Err(error) => {
                warn_lookup_degraded(&error);
                DuplicateVerdict::None
            }
        }
    }

    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

fn warn_lookup_degraded(error: &StoreError) {
    tracing::warn!(%error, "duplicate lookup failed; treating candidate as non-duplicate");
}
