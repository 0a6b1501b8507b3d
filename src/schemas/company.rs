//! Company record shapes
//!
//! A company row as the store returns it, plus the create/update payloads.
//! Only `name` is required; the contact-detail fields are nullable columns.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A company row from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Store-assigned identity
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload: everything except identity and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

/// Partial update payload: absent fields are left untouched by the store,
/// so none of them may serialize when unset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl CompanyUpdate {
    /// True when the payload carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.country.is_none()
            && self.postal_code.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_company_row_deserializes() {
        let row = json!({
            "id": 7,
            "name": "Acme",
            "email": null,
            "phone": "555-0100",
            "address": null,
            "city": "Oslo",
            "state": null,
            "country": "NO",
            "postal_code": null,
            "created_at": "2024-04-09T15:00:00+00:00",
            "updated_at": null
        });

        let company: Company = serde_json::from_value(row).unwrap();
        assert_eq!(company.id, 7);
        assert_eq!(company.name, "Acme");
        assert_eq!(company.phone.as_deref(), Some("555-0100"));
        assert!(company.email.is_none());
        assert!(company.created_at.is_some());
        assert!(company.updated_at.is_none());
    }

    #[test]
    fn test_create_serializes_only_set_fields() {
        let payload = CompanyCreate {
            name: "Acme".to_string(),
            email: None,
            phone: None,
            address: None,
            city: None,
            state: None,
            country: None,
            postal_code: None,
        };

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, json!({"name": "Acme"}));
    }

    #[test]
    fn test_partial_update_body_has_only_supplied_fields() {
        let update = CompanyUpdate {
            city: Some("Oslo".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, json!({"city": "Oslo"}));
    }

    #[test]
    fn test_empty_update_detected() {
        let update: CompanyUpdate = serde_json::from_value(json!({})).unwrap();
        assert!(update.is_empty());

        let update: CompanyUpdate =
            serde_json::from_value(json!({"name": "Acme"})).unwrap();
        assert!(!update.is_empty());
    }
}
