//! UI Components
//!
//! Reusable Leptos components and pages.

mod admin_dashboard;
mod booking_form;
mod delete_confirm_button;
mod lab_services;
mod test_form;
mod tests_table;
mod users_table;

pub use admin_dashboard::AdminDashboard;
pub use booking_form::BookingForm;
pub use delete_confirm_button::DeleteConfirmButton;
pub use lab_services::LabServices;
pub use test_form::TestForm;
pub use tests_table::TestsTable;
pub use users_table::UsersTable;

/// Blocking alert for failed user-initiated mutations
pub(crate) fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Console logging for failures that must stay silent in the UI
pub(crate) fn console_error(message: &str) {
    web_sys::console::error_1(&message.into());
}
