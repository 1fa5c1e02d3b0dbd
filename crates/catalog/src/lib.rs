//! Catalog domain module.
//!
//! This crate contains the business rules that gate admission into the sales
//! catalog, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage). The duplicate detector works over a snapshot of existing
//! records supplied by the caller.

pub mod duplicate;
pub mod product;
pub mod validation;

pub use duplicate::{DuplicateVerdict, classify_duplicate};
pub use product::{ProductDraft, ProductStatus, ProductSummary};
pub use validation::{
    AdmissionChecks, AdmissionInputs, RejectionReason, ValidationResult, validate_admission,
};
