//! Application Context
//!
//! Shared state provided via Leptos Context API.

use crate::models::CurrentUser;
use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Logged-in user, read once at mount; None while browsing anonymously.
    /// Passed explicitly so the booking form's prefill stays testable.
    pub current_user: ReadSignal<Option<CurrentUser>>,
    /// Test picked on the services page, prefills the booking form - read
    pub selected_test: ReadSignal<Option<String>>,
    /// Test picked on the services page - write
    set_selected_test: WriteSignal<Option<String>>,
}

impl AppContext {
    pub fn new(
        current_user: ReadSignal<Option<CurrentUser>>,
        selected_test: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
    ) -> Self {
        Self {
            current_user,
            selected_test: selected_test.0,
            set_selected_test: selected_test.1,
        }
    }

    /// Remember which test the visitor clicked before moving to booking
    pub fn select_test(&self, name: Option<String>) {
        self.set_selected_test.set(name);
    }
}
