//! # Client Record Model
//!
//! The record shape shared by every store and by the HTTP API.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Date format used for `lastContacted`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A stored client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientRecord {
    /// Store-assigned identity
    pub id: u64,

    /// Display name (always present)
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub note: String,

    /// Day of creation, `YYYY-MM-DD`
    #[serde(default)]
    pub last_contacted: String,
}

impl ClientRecord {
    /// Build a record from creation input, normalizing absent fields to empty strings.
    pub fn from_input(id: u64, input: NewClient, last_contacted: String) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email.unwrap_or_default(),
            phone: input.phone.unwrap_or_default(),
            note: input.note.unwrap_or_default(),
            last_contacted,
        }
    }
}

/// Creation input
///
/// Optional fields keep the absent/empty distinction until a store
/// normalizes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewClient {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl NewClient {
    /// Input with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// Current UTC date truncated to day precision
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Current UTC date formatted for `lastContacted`
pub fn today_string() -> String {
    today().format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_serializes_camel_case() {
        let record = ClientRecord {
            id: 7,
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: String::new(),
            note: String::new(),
            last_contacted: "2025-12-01".to_string(),
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["lastContacted"], "2025-12-01");
        assert!(value.get("last_contacted").is_none());
    }

    #[test]
    fn test_from_input_normalizes_absent_fields() {
        let input = NewClient::named("Jane Doe").with_email("jane@example.com");
        let record = ClientRecord::from_input(3, input, "2026-01-02".to_string());

        assert_eq!(record.id, 3);
        assert_eq!(record.email, "jane@example.com");
        assert_eq!(record.phone, "");
        assert_eq!(record.note, "");
    }

    #[test]
    fn test_new_client_keeps_absent_fields_absent() {
        let input: NewClient = serde_json::from_value(json!({"name": "A", "phone": ""})).unwrap();
        assert_eq!(input.email, None);
        assert_eq!(input.phone, Some(String::new()));
    }

    #[test]
    fn test_today_string_format() {
        let s = today_string();
        assert_eq!(s.len(), 10);
        assert!(NaiveDate::parse_from_str(&s, DATE_FORMAT).is_ok());
    }
}
