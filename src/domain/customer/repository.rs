//! Customer repository trait

use async_trait::async_trait;

use super::entity::{Customer, CustomerFields, CustomerId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Repository for customer persistence
///
/// Each method maps to a single statement against the backing store.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Insert a new customer; the store assigns the id
    async fn create(&self, fields: CustomerFields) -> Result<Customer, DomainError>;

    /// Get a customer by id
    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, DomainError>;

    /// List every customer
    async fn list(&self) -> Result<Vec<Customer>, DomainError>;

    /// Overwrite all fields of a customer.
    /// Returns `None` when no row matched.
    async fn update(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Option<Customer>, DomainError>;

    /// Delete a customer, returning whether a row matched
    async fn delete(&self, id: CustomerId) -> Result<bool, DomainError>;

    /// Cheap connectivity probe for readiness checks
    async fn ping(&self) -> Result<(), DomainError>;
}
