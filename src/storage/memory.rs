//! In-memory calculation store.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{Storage, StorageError};
use crate::model::{Calculation, CalculationPatch, NewCalculation};

/// Calculation store keeping records in insertion order.
///
/// The process owns a single instance shared across request handlers;
/// contents are lost on shutdown.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    records: RwLock<Vec<Calculation>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, id: &str) -> Result<Option<Calculation>, StorageError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> Result<Vec<Calculation>, StorageError> {
        Ok(self.records.read().await.clone())
    }

    async fn create(&self, new: NewCalculation) -> Result<Calculation, StorageError> {
        let calculation = Calculation {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            location: new.location,
            cost_per_kwh: new.cost_per_kwh,
            appliances: new.appliances,
            customer_name: new.customer_name,
            customer_email: new.customer_email,
            customer_phone: new.customer_phone,
            created_at: Utc::now(),
        };
        self.records.write().await.push(calculation.clone());
        Ok(calculation)
    }

    async fn update(
        &self,
        id: &str,
        patch: CalculationPatch,
    ) -> Result<Option<Calculation>, StorageError> {
        let mut records = self.records.write().await;
        let Some(existing) = records.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        patch.apply_to(existing);
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|c| c.id != id);
        Ok(records.len() < before)
    }
}
