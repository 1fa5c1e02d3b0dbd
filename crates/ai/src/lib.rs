//! `provet-ai`
//!
//! **Responsibility:** Optional brand-fit scoring boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not depend on catalog/pipeline types beyond `provet-core`.
//! - It must not mutate domain state.
//! - It emits **analysis results**, not domain decisions; the pipeline maps
//!   recommendations onto lifecycle statuses.
//!
//! The external scoring capability is either present or absent at
//! construction time. Absence and call failure both degrade to "no analysis",
//! a first-class outcome the rest of the system is built to handle.

pub mod analysis;
pub mod analyzer;
pub mod gemini;
pub mod scorer;

pub use analysis::{BrandAnalysis, BrandScores, Recommendation, parse_analysis};
pub use analyzer::{BrandFitAnalyzer, PLACEHOLDER_IMAGE};
pub use gemini::GeminiScorer;
pub use scorer::{BrandScorer, ScoreError, ScoreRequest};
