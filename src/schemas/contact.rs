//! Contact record shapes
//!
//! Contacts always belong to exactly one company (`company_id`); the store
//! enforces the reference. `company` is only populated when the query asked
//! for the relation to be embedded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::company::Company;

/// A contact row from the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Store-assigned identity
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: String,
    pub city: String,
    pub company_id: i64,
    /// Embedded company snapshot from a with-relation query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Insert payload: everything except identity and timestamps
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub phone: String,
    pub city: String,
    pub company_id: i64,
}

/// Partial update payload: absent fields stay untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

impl ContactUpdate {
    /// True when the payload carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.city.is_none()
            && self.company_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn contact_row() -> serde_json::Value {
        json!({
            "id": 3,
            "name": "Jane Doe",
            "email": "jane@acme.test",
            "phone": "555-0101",
            "city": "Oslo",
            "company_id": 7,
            "created_at": "2024-04-09T15:00:00+00:00",
            "updated_at": "2024-04-10T09:30:00+00:00"
        })
    }

    #[test]
    fn test_row_without_embed_has_no_company() {
        let contact: Contact = serde_json::from_value(contact_row()).unwrap();
        assert_eq!(contact.company_id, 7);
        assert!(contact.company.is_none());

        // The absent relation must not serialize as "company": null
        let json = serde_json::to_value(&contact).unwrap();
        assert!(json.get("company").is_none());
    }

    #[test]
    fn test_row_with_embedded_company() {
        let mut row = contact_row();
        row["company"] = json!({
            "id": 7,
            "name": "Acme",
            "email": null,
            "phone": null,
            "address": null,
            "city": null,
            "state": null,
            "country": null,
            "postal_code": null,
            "created_at": null,
            "updated_at": null
        });

        let contact: Contact = serde_json::from_value(row).unwrap();
        let company = contact.company.expect("embed should deserialize");
        assert_eq!(company.id, contact.company_id);
        assert_eq!(company.name, "Acme");
    }

    #[test]
    fn test_create_requires_phone_and_city() {
        let missing_phone = json!({
            "name": "Jane Doe",
            "city": "Oslo",
            "company_id": 7
        });
        assert!(serde_json::from_value::<ContactCreate>(missing_phone).is_err());

        let missing_city = json!({
            "name": "Jane Doe",
            "phone": "555-0101",
            "company_id": 7
        });
        assert!(serde_json::from_value::<ContactCreate>(missing_city).is_err());
    }

    #[test]
    fn test_partial_update_body_has_only_supplied_fields() {
        let update = ContactUpdate {
            phone: Some("555-0199".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, json!({"phone": "555-0199"}));
    }
}
