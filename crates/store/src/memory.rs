//! In-memory product store.

use std::collections::HashMap;
use std::sync::RwLock;

use provet_catalog::{ProductStatus, ProductSummary};
use provet_core::ProductId;

use crate::record::{DashboardStats, ProductRecord};
use crate::{ProductStore, RECENT_LIMIT, StoreError};

/// In-memory record store.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    records: RwLock<HashMap<ProductId, ProductRecord>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted_newest_first(mut records: Vec<ProductRecord>) -> Vec<ProductRecord> {
        records.sort_by(|a, b| {
            b.submitted_at
                .cmp(&a.submitted_at)
                .then_with(|| b.id.as_uuid().cmp(a.id.as_uuid()))
        });
        records
    }
}

impl ProductStore for InMemoryProductStore {
    fn create(&self, record: ProductRecord) -> Result<ProductRecord, StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        if records.contains_key(&record.id) {
            return Err(StoreError::Conflict(format!(
                "record {} already exists",
                record.id
            )));
        }

        records.insert(record.id, record.clone());
        Ok(record)
    }

    fn get(&self, id: ProductId) -> Result<Option<ProductRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(records.get(&id).cloned())
    }

    fn find_by_url(&self, url: &str) -> Result<Option<ProductSummary>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(records
            .values()
            .find(|r| r.draft.source_url == url)
            .map(ProductRecord::summary))
    }

    fn list_summaries(&self) -> Result<Vec<ProductSummary>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        Ok(records.values().map(ProductRecord::summary).collect())
    }

    fn list(&self, filter: Option<ProductStatus>) -> Result<Vec<ProductRecord>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        let matching = records
            .values()
            .filter(|r| filter.is_none_or(|status| r.status == status))
            .cloned()
            .collect();
        Ok(Self::sorted_newest_first(matching))
    }

    fn update_status(&self, id: ProductId, status: ProductStatus) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        let record = records.get_mut(&id).ok_or(StoreError::NotFound)?;
        record.status = status;
        Ok(())
    }

    fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;
        records.remove(&id).ok_or(StoreError::NotFound)?;
        Ok(())
    }

    fn dashboard_stats(&self) -> Result<DashboardStats, StoreError> {
        let all = self.list(None)?;
        let count = |status: ProductStatus| all.iter().filter(|r| r.status == status).count();

        Ok(DashboardStats {
            total: all.len(),
            approved: count(ProductStatus::Approved),
            rejected: count(ProductStatus::Rejected),
            review: count(ProductStatus::Review),
            recent: all.into_iter().take(RECENT_LIMIT).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use provet_catalog::{AdmissionInputs, ProductDraft, validate_admission};
    use provet_core::Cents;
    use provet_pricing::{DayRange, calculate_pricing, total_shipping_window};

    fn record(url: &str, name: &str, status: ProductStatus, age_days: i64) -> ProductRecord {
        let draft = ProductDraft {
            source_url: url.to_string(),
            name: name.to_string(),
            category: "Home".to_string(),
            product_cost: Cents::new(1000),
            shipping_cost: Cents::new(500),
            lastmile_fee: Cents::ZERO,
            processing_days: DayRange::new(1, 3),
            delivery_days: DayRange::new(4, 8),
            us_warehouse: true,
            chinese_inventory: false,
            inventory_count: 120,
            images: vec![],
            notes: String::new(),
            submitted_by: "dara".to_string(),
        };
        let pricing = calculate_pricing(draft.cost_inputs());
        let shipping = total_shipping_window(draft.processing_days, draft.delivery_days);
        let validation = validate_admission(AdmissionInputs {
            us_warehouse: draft.us_warehouse,
            total_days_max: shipping.max,
            inventory_count: draft.inventory_count,
            recommended_price: pricing.recommended_price,
            total_cost: pricing.total_cost,
        });
        ProductRecord::assemble(
            draft,
            pricing,
            shipping,
            validation,
            None,
            status,
            Utc::now() - Duration::days(age_days),
        )
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = InMemoryProductStore::new();
        let created = store
            .create(record("https://x/1", "Linen Throw", ProductStatus::Review, 0))
            .unwrap();
        let fetched = store.get(created.id).unwrap().unwrap();
        assert_eq!(created, fetched);
    }

    #[test]
    fn create_rejects_duplicate_id() {
        let store = InMemoryProductStore::new();
        let created = store
            .create(record("https://x/1", "Linen Throw", ProductStatus::Review, 0))
            .unwrap();
        let err = store.create(created).unwrap_err();
        assert!(matches!(err, StoreError::Conflict(_)));
    }

    #[test]
    fn find_by_url_sees_existing_records() {
        let store = InMemoryProductStore::new();
        store
            .create(record("https://x/1", "Linen Throw", ProductStatus::Review, 0))
            .unwrap();
        assert!(store.find_by_url("https://x/1").unwrap().is_some());
        assert!(store.find_by_url("https://x/2").unwrap().is_none());
    }

    #[test]
    fn list_filters_by_status_newest_first() {
        let store = InMemoryProductStore::new();
        store
            .create(record("https://x/1", "Old Approved", ProductStatus::Approved, 10))
            .unwrap();
        store
            .create(record("https://x/2", "New Approved", ProductStatus::Approved, 1))
            .unwrap();
        store
            .create(record("https://x/3", "In Review", ProductStatus::Review, 5))
            .unwrap();

        let approved = store.list(Some(ProductStatus::Approved)).unwrap();
        assert_eq!(approved.len(), 2);
        assert_eq!(approved[0].draft.name, "New Approved");
        assert_eq!(approved[1].draft.name, "Old Approved");

        assert_eq!(store.list(None).unwrap().len(), 3);
    }

    #[test]
    fn update_status_mutates_only_status() {
        let store = InMemoryProductStore::new();
        let created = store
            .create(record("https://x/1", "Linen Throw", ProductStatus::Review, 0))
            .unwrap();

        store
            .update_status(created.id, ProductStatus::Approved)
            .unwrap();

        let fetched = store.get(created.id).unwrap().unwrap();
        assert_eq!(fetched.status, ProductStatus::Approved);
        assert_eq!(fetched.pricing, created.pricing);
        assert_eq!(fetched.validation, created.validation);
    }

    #[test]
    fn update_status_on_missing_record_is_not_found() {
        let store = InMemoryProductStore::new();
        let err = store
            .update_status(ProductId::new(), ProductStatus::Approved)
            .unwrap_err();
        assert_eq!(err, StoreError::NotFound);
    }

    #[test]
    fn delete_removes_the_record() {
        let store = InMemoryProductStore::new();
        let created = store
            .create(record("https://x/1", "Linen Throw", ProductStatus::Review, 0))
            .unwrap();
        store.delete(created.id).unwrap();
        assert!(store.get(created.id).unwrap().is_none());
        assert_eq!(store.delete(created.id).unwrap_err(), StoreError::NotFound);
    }

    #[test]
    fn dashboard_counts_by_status_and_caps_recent() {
        let store = InMemoryProductStore::new();
        for i in 0..7 {
            let status = if i % 2 == 0 {
                ProductStatus::Approved
            } else {
                ProductStatus::Review
            };
            store
                .create(record(&format!("https://x/{i}"), &format!("Item {i}"), status, i))
                .unwrap();
        }

        let stats = store.dashboard_stats().unwrap();
        assert_eq!(stats.total, 7);
        assert_eq!(stats.approved, 4);
        assert_eq!(stats.review, 3);
        assert_eq!(stats.rejected, 0);
        assert_eq!(stats.recent.len(), RECENT_LIMIT);
        // Newest first: age 0 is the most recent submission.
        assert_eq!(stats.recent[0].draft.name, "Item 0");
    }
}
