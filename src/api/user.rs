//! User Resource
//!
//! Frontend bindings for the /users and /admin endpoints. Users are
//! read-only from the client.

use super::ApiError;
use crate::format::sort_users_newest_first;
use crate::models::{User, UserCount};

/// List all users, newest first.
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    let mut users: Vec<User> = super::get_json("/users").await?;
    sort_users_newest_first(&mut users);
    Ok(users)
}

pub async fn admin_count() -> Result<UserCount, ApiError> {
    super::get_json("/admin/count").await
}
