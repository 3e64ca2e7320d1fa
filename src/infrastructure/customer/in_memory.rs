//! In-memory customer repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::customer::{Customer, CustomerFields, CustomerId, CustomerRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<CustomerId, Customer>,
    /// Last value handed out, like a `SERIAL` sequence
    sequence: i32,
}

/// In-memory implementation of CustomerRepository
///
/// Ids come from a monotonically increasing sequence starting at 1 and are
/// never reused after a delete.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCustomerRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryCustomerRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create(&self, fields: CustomerFields) -> Result<Customer, DomainError> {
        let mut table = self.table.write().await;

        table.sequence = table
            .sequence
            .checked_add(1)
            .ok_or_else(|| DomainError::storage("customer id sequence exhausted"))?;

        let customer = Customer::from_fields(CustomerId::new(table.sequence), fields);
        table.rows.insert(customer.id, customer.clone());

        Ok(customer)
    }

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn update(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Option<Customer>, DomainError> {
        let mut table = self.table.write().await;

        match table.rows.get_mut(&id) {
            Some(existing) => {
                *existing = Customer::from_fields(id, fields);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, DomainError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
