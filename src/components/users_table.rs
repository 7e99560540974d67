//! Users Table Component
//!
//! Read-only admin table of registered users, newest first.

use leptos::prelude::*;

use crate::format::format_date;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn UsersTable() -> impl IntoView {
    let store = use_dashboard_store();

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Name"</th>
                        <th>"Email"</th>
                        <th>"Role"</th>
                        <th>"Joined"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each={move || store.users().get().into_iter().enumerate().collect::<Vec<_>>()}
                        key={|(_, user)| user.id.clone()}
                        children={move |(i, user)| {
                            view! {
                                <tr>
                                    <td>{i + 1}</td>
                                    <td class="capitalize">{user.name.clone()}</td>
                                    <td>{user.email.clone()}</td>
                                    <td class="capitalize">{user.role.clone()}</td>
                                    <td>{format_date(&user.created_at)}</td>
                                </tr>
                            }
                        }}
                    />
                </tbody>
            </table>
        </div>
    }
}
