//! PostgreSQL customer repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::customer::{Customer, CustomerFields, CustomerId, CustomerRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of CustomerRepository
#[derive(Debug, Clone)]
pub struct PostgresCustomerRepository {
    pool: PgPool,
}

impl PostgresCustomerRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresCustomerRepository {
    async fn create(&self, fields: CustomerFields) -> Result<Customer, DomainError> {
        let id: i32 = sqlx::query_scalar(
            "INSERT INTO customers (name, email, status) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(Customer::from_fields(CustomerId::new(id), fields))
    }

    async fn get(&self, id: CustomerId) -> Result<Option<Customer>, DomainError> {
        let row = sqlx::query("SELECT id, name, email, status FROM customers WHERE id = $1")
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        row.as_ref().map(row_to_customer).transpose()
    }

    async fn list(&self) -> Result<Vec<Customer>, DomainError> {
        let rows = sqlx::query("SELECT id, name, email, status FROM customers ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        rows.iter().map(row_to_customer).collect()
    }

    async fn update(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> Result<Option<Customer>, DomainError> {
        let result =
            sqlx::query("UPDATE customers SET name = $2, email = $3, status = $4 WHERE id = $1")
                .bind(id.value())
                .bind(&fields.name)
                .bind(&fields.email)
                .bind(&fields.status)
                .execute(&self.pool)
                .await
                .map_err(|e| DomainError::storage(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Ok(Some(Customer::from_fields(id, fields)))
    }

    async fn delete(&self, id: CustomerId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM customers WHERE id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        Ok(())
    }
}

/// Row scan
fn row_to_customer(row: &sqlx::postgres::PgRow) -> Result<Customer, DomainError> {
    let id: i32 = row
        .try_get("id")
        .map_err(|e| DomainError::storage(e.to_string()))?;

    Ok(customer_from_columns(
        id,
        text_column(row, "name")?,
        text_column(row, "email")?,
        text_column(row, "status")?,
    ))
}

fn text_column(row: &sqlx::postgres::PgRow, column: &str) -> Result<Option<String>, DomainError> {
    row.try_get(column)
        .map_err(|e| DomainError::storage(e.to_string()))
}

/// `NULL` text columns read back as empty strings
fn customer_from_columns(
    id: i32,
    name: Option<String>,
    email: Option<String>,
    status: Option<String>,
) -> Customer {
    Customer::from_fields(
        CustomerId::new(id),
        CustomerFields::new(
            name.unwrap_or_default(),
            email.unwrap_or_default(),
            status.unwrap_or_default(),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_columns_read_as_empty() {
        let customer = customer_from_columns(3, Some("Ann".to_string()), None, None);

        assert_eq!(customer.id, CustomerId::new(3));
        assert_eq!(customer.name, "Ann");
        assert_eq!(customer.email, "");
        assert_eq!(customer.status, "");
    }

    #[test]
    fn test_populated_columns_are_kept() {
        let customer = customer_from_columns(
            1,
            Some("Ann".to_string()),
            Some("a@x.com".to_string()),
            Some("active".to_string()),
        );

        assert_eq!(
            customer,
            Customer::from_fields(
                CustomerId::new(1),
                CustomerFields::new("Ann", "a@x.com", "active")
            )
        );
    }
}
