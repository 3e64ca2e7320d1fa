//! Customer entity and identifiers

use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::DomainError;

/// Server-assigned customer identifier (PostgreSQL `SERIAL`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i32);

impl CustomerId {
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// Parse an identifier from a path segment
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        raw.parse::<i32>().map(Self).map_err(|e| {
            DomainError::invalid_id(format!("invalid customer id {:?}: {}", raw, e))
        })
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutable customer fields, as accepted by create and update
///
/// Every field is optional on the wire; absent and `null` both read as the
/// empty string. An `id` in the body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl CustomerFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            status: status.into(),
        }
    }
}

/// A persisted customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub status: String,
}

impl Customer {
    pub fn from_fields(id: CustomerId, fields: CustomerFields) -> Self {
        Self {
            id,
            name: fields.name,
            email: fields.email,
            status: fields.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(CustomerId::parse("42").unwrap(), CustomerId::new(42));
        assert_eq!(CustomerId::parse("-3").unwrap().value(), -3);
    }

    #[test]
    fn test_parse_invalid_id() {
        let err = CustomerId::parse("abc").unwrap_err();
        assert!(matches!(err, DomainError::InvalidId { .. }));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_parse_overflowing_id() {
        assert!(CustomerId::parse("99999999999").is_err());
    }

    #[test]
    fn test_fields_default_to_empty() {
        let fields: CustomerFields = serde_json::from_str(r#"{"name":"Ann"}"#).unwrap();
        assert_eq!(fields, CustomerFields::new("Ann", "", ""));
    }

    #[test]
    fn test_null_fields_read_as_empty() {
        let fields: CustomerFields =
            serde_json::from_str(r#"{"name":"Ann","email":null,"status":null}"#).unwrap();
        assert_eq!(fields, CustomerFields::new("Ann", "", ""));
    }

    #[test]
    fn test_non_string_field_is_rejected() {
        assert!(serde_json::from_str::<CustomerFields>(r#"{"name":5}"#).is_err());
    }

    #[test]
    fn test_fields_ignore_id() {
        let fields: CustomerFields =
            serde_json::from_str(r#"{"id":99,"name":"Ann","email":"a@x.com","status":"active"}"#)
                .unwrap();
        assert_eq!(fields, CustomerFields::new("Ann", "a@x.com", "active"));
    }

    #[test]
    fn test_customer_serialization() {
        let customer = Customer::from_fields(
            CustomerId::new(1),
            CustomerFields::new("Ann", "a@x.com", "active"),
        );
        let json = serde_json::to_value(&customer).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id":1,"name":"Ann","email":"a@x.com","status":"active"})
        );
    }
}
