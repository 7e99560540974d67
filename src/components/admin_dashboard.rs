//! Admin Dashboard Page
//!
//! Stat cards plus the lab-test and user management panels. One poller
//! re-fetches all four collections every ten seconds; a failed fetch keeps
//! the last-known-good data on screen and only logs.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{console_error, TestForm, TestsTable, UsersTable};
use crate::api;
use crate::models::TestDraft;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};
use crate::sync::{Poller, DASHBOARD_POLL_MS};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = use_dashboard_store();

    let (show_users, set_show_users) = signal(false);
    let (show_tests, set_show_tests) = signal(false);
    let show_form = RwSignal::new(false);
    let draft = RwSignal::new(TestDraft::default());

    // One batch of four independent fetches. Each updates only its own state
    // slice, so completion order does not matter.
    let poller = Poller::start(DASHBOARD_POLL_MS, move |poller: &Poller| {
        let fetch_count = poller.clone();
        spawn_local(async move {
            match api::admin_count().await {
                Ok(count) => {
                    store.user_count().set(count.user_count);
                    fetch_count.clear_error();
                }
                Err(err) => {
                    console_error(&format!("Failed to fetch user count: {}", err));
                    fetch_count.record_error(err);
                }
            }
        });

        let fetch_tests = poller.clone();
        spawn_local(async move {
            match api::list_tests().await {
                Ok(tests) => {
                    store.tests().set(tests);
                    fetch_tests.clear_error();
                }
                Err(err) => {
                    console_error(&format!("Failed to fetch tests: {}", err));
                    fetch_tests.record_error(err);
                }
            }
        });

        let fetch_users = poller.clone();
        spawn_local(async move {
            match api::list_users().await {
                Ok(users) => {
                    store.users().set(users);
                    fetch_users.clear_error();
                }
                Err(err) => {
                    console_error(&format!("Failed to fetch users: {}", err));
                    fetch_users.record_error(err);
                }
            }
        });

        let fetch_bookings = poller.clone();
        spawn_local(async move {
            match api::list_bookings().await {
                Ok(bookings) => {
                    store.bookings().set(bookings);
                    fetch_bookings.clear_error();
                }
                Err(err) => {
                    console_error(&format!("Failed to fetch bookings: {}", err));
                    fetch_bookings.record_error(err);
                }
            }
        });
    });

    let sync_error = poller.last_error;
    {
        let poller = poller.clone();
        on_cleanup(move || poller.stop());
    }

    let start_adding = move |_| {
        draft.set(TestDraft::default());
        show_form.set(true);
    };

    let edit_test = move |test| {
        draft.set(TestDraft::from_test(&test));
        show_form.set(true);
    };

    view! {
        <div class="dashboard">
            <h1>"Admin Dashboard"</h1>

            <Show when=move || sync_error.get().is_some()>
                <p class="state-note error">
                    "Live updates are failing; showing the last known data."
                </p>
            </Show>

            <div class="stat-cards">
                <div class="stat-card">
                    <h2>"Total Users"</h2>
                    <p>{move || store.user_count().get()}</p>
                </div>
                <div class="stat-card">
                    <h2>"Total Lab Tests"</h2>
                    <p>{move || store.tests().get().len()}</p>
                </div>
                <div class="stat-card">
                    <h2>"Bookings"</h2>
                    <p>{move || store.bookings().get().len()}</p>
                </div>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h2>"Manage Lab Tests"</h2>
                    <button on:click=move |_| set_show_tests.update(|v| *v = !*v)>
                        {move || if show_tests.get() { "Hide Tests" } else { "Show Tests" }}
                    </button>
                </div>

                <Show when=move || show_form.get()>
                    <TestForm draft=draft visible=show_form />
                </Show>

                <Show when=move || show_tests.get() && !store.tests().get().is_empty()>
                    <TestsTable on_edit=edit_test />
                </Show>

                <Show when=move || !show_form.get() && !(show_tests.get() && !store.tests().get().is_empty())>
                    <div class="add-test-prompt">
                        <button on:click=start_adding>"+ Add Test"</button>
                    </div>
                </Show>

                <Show when=move || store.tests().get().is_empty() && !show_form.get()>
                    <div class="empty-placeholder">"No tests yet."</div>
                </Show>
            </div>

            <div class="panel">
                <div class="panel-header">
                    <h2>"Users"</h2>
                    <button on:click=move |_| set_show_users.update(|v| *v = !*v)>
                        {move || if show_users.get() { "Hide Users" } else { "Show Users" }}
                    </button>
                </div>

                <Show when=move || show_users.get()>
                    <UsersTable />
                </Show>
            </div>
        </div>
    }
}
