//! Test Form Component
//!
//! Add/edit form over a [`TestDraft`]. Submit dispatches a create or an
//! update depending on the draft's `editing` id; on success the draft resets
//! and the matching optimistic list update runs. On failure the draft is
//! left intact so the user can retry.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{alert, console_error};
use crate::api;
use crate::models::TestDraft;
use crate::store::{store_prepend_test, store_replace_test, use_dashboard_store};

#[component]
pub fn TestForm(draft: RwSignal<TestDraft>, visible: RwSignal<bool>) -> impl IntoView {
    let store = use_dashboard_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();

        spawn_local(async move {
            let result = match current.editing.clone() {
                Some(id) => api::update_test(&id, &current)
                    .await
                    // replace keyed on the id we sent, not the one returned
                    .map(|updated| store_replace_test(&store, &id, updated)),
                None => api::create_test(&current)
                    .await
                    .map(|created| store_prepend_test(&store, created)),
            };

            match result {
                Ok(()) => {
                    draft.set(TestDraft::default());
                    visible.set(false);
                }
                Err(err) => {
                    let action = if current.editing.is_some() { "Edit" } else { "Add" };
                    console_error(&format!("{} test failed: {}", action, err));
                    alert(&format!("{} test failed, please try again", action));
                }
            }
        });
    };

    let on_cancel = move |_| {
        draft.set(TestDraft::default());
        visible.set(false);
    };

    view! {
        <form class="test-form" on:submit=on_submit>
            <label class="test-form-label">"Emoji/Icon for Test:"</label>
            <input
                type="text"
                placeholder="Emoji or icon glyph (optional)"
                prop:value=move || draft.get().emoji
                on:input=move |ev| draft.update(|d| d.emoji = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Test Name"
                required
                prop:value=move || draft.get().name
                on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Category"
                required
                prop:value=move || draft.get().category
                on:input=move |ev| draft.update(|d| d.category = event_target_value(&ev))
            />
            <input
                type="number"
                min="0"
                placeholder="Price (KES)"
                required
                prop:value=move || draft.get().price
                on:input=move |ev| draft.update(|d| d.price = event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Availability (e.g., Yes/No or In Stock)"
                required
                prop:value=move || draft.get().availability
                on:input=move |ev| draft.update(|d| d.availability = event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                rows="3"
                prop:value=move || draft.get().description
                on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
            />
            <div class="test-form-actions">
                <button type="submit" class="save-btn">
                    {move || if draft.get().editing.is_some() { "Save changes" } else { "Add Test" }}
                </button>
                <button type="button" class="cancel-btn" on:click=on_cancel>
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
