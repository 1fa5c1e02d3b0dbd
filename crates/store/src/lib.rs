//! Persistence boundary for admitted product records.
//!
//! The pipeline consumes storage through the [`ProductStore`] trait; the
//! in-memory implementation here serves tests/dev, and a persistent backend
//! slots in behind the same trait without touching the domain crates.

pub mod memory;
pub mod record;

use provet_catalog::{ProductStatus, ProductSummary};
use provet_core::ProductId;
use thiserror::Error;

pub use memory::InMemoryProductStore;
pub use record::{DashboardStats, ProductRecord};

/// Number of records returned in the dashboard "recent" strip.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Repository interface over product records.
///
/// Reads used by the duplicate detector (`find_by_url`, `list_summaries`)
/// return a snapshot at call time; no locking spans a whole submission.
pub trait ProductStore: Send + Sync + 'static {
    /// Persist a newly assembled record. Fails on id conflict.
    fn create(&self, record: ProductRecord) -> Result<ProductRecord, StoreError>;

    fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError>;

    /// Exact-duplicate probe: existing record with this source URL, if any.
    fn find_by_url(&self, url: &str) -> Result<Option<ProductSummary>, StoreError>;

    /// Summary rows for all existing records (duplicate-detection snapshot).
    fn list_summaries(&self) -> Result<Vec<ProductSummary>, StoreError>;

    /// All records, newest first, optionally filtered by status.
    fn list(&self, filter: Option<ProductStatus>) -> Result<Vec<ProductRecord>, StoreError>;

    /// Explicit manual status transition; the only permitted mutation.
    fn update_status(&self, id: ProductId, status: ProductStatus) -> Result<(), StoreError>;

    fn delete(&self, id: ProductId) -> Result<(), StoreError>;

    fn dashboard_stats(&self) -> Result<DashboardStats, StoreError>;
}
