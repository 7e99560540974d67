//! Tests Table Component
//!
//! Admin table of lab tests with edit and delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{console_error, DeleteConfirmButton};
use crate::api;
use crate::format::format_price;
use crate::models::LabTest;
use crate::store::{store_remove_test, use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn TestsTable(#[prop(into)] on_edit: Callback<LabTest>) -> impl IntoView {
    let store = use_dashboard_store();

    let delete_test = move |id: String| {
        spawn_local(async move {
            match api::delete_test(&id).await {
                Ok(()) => store_remove_test(&store, &id),
                Err(err) => console_error(&format!("Failed to delete test: {}", err)),
            }
        });
    };

    view! {
        <div class="table-wrap">
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Icon"</th>
                        <th>"Name"</th>
                        <th>"Category"</th>
                        <th>"Price"</th>
                        <th>"Availability"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each={move || store.tests().get().into_iter().enumerate().collect::<Vec<_>>()}
                        key={|(_, test)| test.id.clone()}
                        children={move |(i, test)| {
                            let edit_target = test.clone();
                            let delete_id = test.id.clone();
                            view! {
                                <tr>
                                    <td>{i + 1}</td>
                                    <td class="icon-cell">{test.emoji.clone().unwrap_or_else(|| "—".to_string())}</td>
                                    <td>{test.name.clone()}</td>
                                    <td>{test.category.clone()}</td>
                                    <td>{format!("Ksh {}", format_price(test.price))}</td>
                                    <td>{test.availability.clone()}</td>
                                    <td class="actions-cell">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| on_edit.run(edit_target.clone())
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=move |_| delete_test(delete_id.clone())
                                        />
                                    </td>
                                </tr>
                            }
                        }}
                    />
                </tbody>
            </table>
        </div>
    }
}
