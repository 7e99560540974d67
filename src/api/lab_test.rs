//! Lab Test Resource
//!
//! Frontend bindings for the /tests endpoints.

use super::ApiError;
use crate::models::{LabTest, TestDraft};

pub async fn list_tests() -> Result<Vec<LabTest>, ApiError> {
    super::get_json("/tests").await
}

/// POST the draft; the server assigns the id and returns the created record.
pub async fn create_test(draft: &TestDraft) -> Result<LabTest, ApiError> {
    super::post_json("/tests", draft).await
}

/// PUT the full draft for an existing id; returns the updated record.
pub async fn update_test(id: &str, draft: &TestDraft) -> Result<LabTest, ApiError> {
    super::put_json(&format!("/tests/{}", id), draft).await
}

pub async fn delete_test(id: &str) -> Result<(), ApiError> {
    super::delete(&format!("/tests/{}", id)).await
}
