//! Frontend Models
//!
//! Data structures matching backend entities. The backend stores documents
//! with Mongo-style `_id` keys and camelCase field names; serde rename
//! attributes map them onto Rust naming.

use serde::{Deserialize, Serialize};

/// Lab test offered by the service (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabTest {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub availability: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// Registered user (read-only from the client)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Booking request; created once per submission, never edited from here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub name: String,
    pub email: String,
    pub date: String,
    #[serde(rename = "testType")]
    pub test_type: String,
}

/// Response of GET /admin/count
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserCount {
    #[serde(rename = "userCount")]
    pub user_count: u64,
}

/// Currently logged-in user, handed to the booking page via context
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    pub name: String,
    pub email: String,
}

/// Transient form state for adding or editing a lab test.
///
/// Every field is a `String` because every field is a controlled text input
/// (price included; the backend parses the numeric string). `editing` is the
/// create-or-edit discriminator: `None` posts a new test, `Some(id)` puts to
/// that id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub availability: String,
    pub description: String,
    pub emoji: String,
    #[serde(skip)]
    pub editing: Option<String>,
}

impl TestDraft {
    /// Populate the draft from an existing test for editing. Missing optional
    /// fields become empty strings so every input stays controlled.
    pub fn from_test(test: &LabTest) -> Self {
        Self {
            name: test.name.clone(),
            category: test.category.clone(),
            price: test.price.to_string(),
            availability: test.availability.clone(),
            description: test.description.clone().unwrap_or_default(),
            emoji: test.emoji.clone().unwrap_or_default(),
            editing: Some(test.id.clone()),
        }
    }
}

/// Transient form state for the booking page
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BookingDraft {
    pub name: String,
    pub email: String,
    pub date: String,
    #[serde(rename = "testType")]
    pub test_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_test_copies_every_field() {
        let test = LabTest {
            id: "42".to_string(),
            name: "CBC".to_string(),
            category: "Blood".to_string(),
            price: 500.0,
            availability: "Yes".to_string(),
            description: Some("Complete blood count".to_string()),
            emoji: Some("🩸".to_string()),
        };

        let draft = TestDraft::from_test(&test);
        assert_eq!(draft.editing.as_deref(), Some("42"));
        assert_eq!(draft.name, "CBC");
        assert_eq!(draft.category, "Blood");
        assert_eq!(draft.price, "500");
        assert_eq!(draft.availability, "Yes");
        assert_eq!(draft.description, "Complete blood count");
        assert_eq!(draft.emoji, "🩸");
    }

    #[test]
    fn test_draft_defaults_missing_optionals_to_empty() {
        let test = LabTest {
            id: "7".to_string(),
            name: "Urinalysis".to_string(),
            category: "Urine".to_string(),
            price: 300.0,
            availability: "In Stock".to_string(),
            description: None,
            emoji: None,
        };

        let draft = TestDraft::from_test(&test);
        assert_eq!(draft.description, "");
        assert_eq!(draft.emoji, "");
    }

    #[test]
    fn lab_test_maps_backend_id_field() {
        let json = r#"{
            "_id": "abc123",
            "name": "CBC",
            "category": "Blood",
            "price": 500,
            "availability": "Yes"
        }"#;
        let test: LabTest = serde_json::from_str(json).unwrap();
        assert_eq!(test.id, "abc123");
        assert_eq!(test.description, None);
    }

    #[test]
    fn test_draft_serializes_without_editing_field() {
        let draft = TestDraft {
            name: "CBC".to_string(),
            editing: Some("42".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&draft).unwrap();
        assert!(!json.contains("editing"));
    }
}
