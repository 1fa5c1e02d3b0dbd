//! Submission pipeline: sequences pricing, validation, duplicate detection
//! and brand-fit analysis into a final lifecycle decision.
//!
//! One submission is one synchronous pass through a small state machine; the
//! only external side effect is the final persist.

pub mod orchestrator;
pub mod quote;

pub use orchestrator::{
    SubmissionOrchestrator, SubmissionOutcome, SubmissionState, SubmitError, decide_status,
};
pub use quote::{Quote, quote};
