//! Customer service - glue between handlers and the repository

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::customer::{Customer, CustomerFields, CustomerId, CustomerRepository};
use crate::domain::DomainError;

/// What update and delete do when no row matches the id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingRowPolicy {
    /// Report success anyway; update echoes the request back
    #[default]
    Ignore,
    /// Fail with `DomainError::NotFound`
    Report,
}

/// Customer service for CRUD over the repository
#[derive(Clone)]
pub struct CustomerService {
    repository: Arc<dyn CustomerRepository>,
    missing_rows: MissingRowPolicy,
}

impl std::fmt::Debug for CustomerService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerService")
            .field("missing_rows", &self.missing_rows)
            .finish_non_exhaustive()
    }
}

impl CustomerService {
    /// Create a new customer service
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self {
            repository,
            missing_rows: MissingRowPolicy::default(),
        }
    }

    pub fn with_missing_row_policy(mut self, policy: MissingRowPolicy) -> Self {
        self.missing_rows = policy;
        self
    }

    pub fn missing_row_policy(&self) -> MissingRowPolicy {
        self.missing_rows
    }

    /// Create a customer; the repository assigns the id
    pub async fn create(&self, fields: CustomerFields) -> Result<Customer, DomainError> {
        let customer = self.repository.create(fields).await?;
        info!(id = %customer.id, "Created customer");
        Ok(customer)
    }

    /// Get a customer by id, failing with `NotFound` when absent
    pub async fn get(&self, id: CustomerId) -> Result<Customer, DomainError> {
        debug!(id = %id, "Getting customer");

        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("customer {} not found", id)))
    }

    /// List all customers
    pub async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        self.repository.list().await
    }

    /// Overwrite a customer's fields
    pub async fn update(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Customer, DomainError> {
        match self.repository.update(id, fields.clone()).await? {
            Some(customer) => {
                info!(id = %id, "Updated customer");
                Ok(customer)
            }
            None => match self.missing_rows {
                MissingRowPolicy::Ignore => {
                    warn!(id = %id, "Update matched no customer");
                    Ok(Customer::from_fields(id, fields))
                }
                MissingRowPolicy::Report => {
                    Err(DomainError::not_found(format!("customer {} not found", id)))
                }
            },
        }
    }

    /// Delete a customer
    pub async fn delete(&self, id: CustomerId) -> Result<(), DomainError> {
        if self.repository.delete(id).await? {
            info!(id = %id, "Deleted customer");
            return Ok(());
        }

        match self.missing_rows {
            MissingRowPolicy::Ignore => {
                warn!(id = %id, "Delete matched no customer");
                Ok(())
            }
            MissingRowPolicy::Report => {
                Err(DomainError::not_found(format!("customer {} not found", id)))
            }
        }
    }

    /// Check the backing store is reachable
    pub async fn ping(&self) -> Result<(), DomainError> {
        self.repository.ping().await
    }
}
