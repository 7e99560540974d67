//! Dashboard State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The list
//! transformations live as plain functions so the update rules stay
//! testable without a browser.

use crate::models::{Booking, LabTest, User};
use leptos::prelude::*;
use reactive_stores::Store;

/// Shared dashboard state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct DashboardState {
    /// Cached lab tests, most recently created first
    pub tests: Vec<LabTest>,
    /// All users, newest first
    pub users: Vec<User>,
    /// All bookings
    pub bookings: Vec<Booking>,
    /// Total registered users reported by /admin/count
    pub user_count: u64,
}

/// Type alias for the store
pub type DashboardStore = Store<DashboardState>;

/// Get the dashboard store from context
pub fn use_dashboard_store() -> DashboardStore {
    expect_context::<DashboardStore>()
}

// ========================
// Optimistic list updates
// ========================
//
// The remote response is trusted verbatim; no merging. Each rule mutates
// only the item it targets.

/// A successful create goes to the head of the list.
pub fn prepend_test(tests: &mut Vec<LabTest>, created: LabTest) {
    tests.insert(0, created);
}

/// Replace the item with `id` by the server's response. Keyed on the id that
/// was sent with the request, so a backend that rewrites identifiers on
/// update cannot strand a stale row.
pub fn replace_test(tests: &mut [LabTest], id: &str, updated: LabTest) {
    if let Some(test) = tests.iter_mut().find(|t| t.id == id) {
        *test = updated;
    }
}

/// Drop the item with `id` from the list.
pub fn remove_test(tests: &mut Vec<LabTest>, id: &str) {
    tests.retain(|t| t.id != id);
}

// ========================
// Store helpers
// ========================

pub fn store_prepend_test(store: &DashboardStore, created: LabTest) {
    prepend_test(&mut store.tests().write(), created);
}

pub fn store_replace_test(store: &DashboardStore, id: &str, updated: LabTest) {
    replace_test(&mut store.tests().write(), id, updated);
}

pub fn store_remove_test(store: &DashboardStore, id: &str) {
    remove_test(&mut store.tests().write(), id);
}
