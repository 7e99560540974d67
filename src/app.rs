//! MediLab Frontend App
//!
//! Top-level component: page switching, shared store and context provision.
//! Routing frameworks are out of scope here; a plain page enum covers the
//! three views.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AdminDashboard, BookingForm, LabServices};
use crate::context::AppContext;
use crate::models::CurrentUser;
use crate::store::DashboardState;

/// Page selection
#[derive(Clone, Copy, PartialEq)]
enum Page {
    Services,
    Book,
    Dashboard,
}

/// Logged-in user left behind by the auth flow, read once at mount
fn read_stored_user() -> Option<CurrentUser> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let raw = storage.get_item("user").ok()??;
    serde_json::from_str(&raw).ok()
}

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Services);
    let (current_user, set_current_user) = signal(Option::<CurrentUser>::None);
    let selected_test = signal(Option::<String>::None);

    provide_context(AppContext::new(current_user, selected_test));
    provide_context(Store::new(DashboardState::default()));

    if let Some(user) = read_stored_user() {
        set_current_user.set(Some(user));
    }

    let nav_class = move |target: Page| {
        move || {
            if page.get() == target {
                "nav-btn active"
            } else {
                "nav-btn"
            }
        }
    };

    view! {
        <div class="app-layout">
            <nav class="top-nav">
                <span class="brand">"MediLab"</span>
                <button class=nav_class(Page::Services) on:click=move |_| set_page.set(Page::Services)>
                    "Services"
                </button>
                <button class=nav_class(Page::Book) on:click=move |_| set_page.set(Page::Book)>
                    "Book a Test"
                </button>
                <button class=nav_class(Page::Dashboard) on:click=move |_| set_page.set(Page::Dashboard)>
                    "Admin"
                </button>
            </nav>

            <main class="main-content">
                {move || match page.get() {
                    Page::Services => view! {
                        <LabServices on_book=move |_name: String| set_page.set(Page::Book) />
                    }.into_any(),
                    Page::Book => view! {
                        <BookingForm on_back=move |_| set_page.set(Page::Services) />
                    }.into_any(),
                    Page::Dashboard => view! { <AdminDashboard /> }.into_any(),
                }}
            </main>
        </div>
    }
}
