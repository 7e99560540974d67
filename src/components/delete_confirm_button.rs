//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation. No request is issued until the user
//! explicitly confirms; declining restores the initial button.

use leptos::prelude::*;

/// Two-step confirmation state. The destructive callback may only fire out
/// of `Confirming`; a decline drops straight back to `Idle`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfirmState {
    Idle,
    Confirming,
}

impl ConfirmState {
    pub fn request(self) -> Self {
        ConfirmState::Confirming
    }

    pub fn decline(self) -> Self {
        ConfirmState::Idle
    }

    pub fn can_fire(self) -> bool {
        self == ConfirmState::Confirming
    }
}

/// Inline delete confirmation button
///
/// Shows a "Delete" button initially. When clicked, shows "Delete?" with
/// confirm/cancel buttons.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when the user confirms deletion
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (state, set_state) = signal(ConfirmState::Idle);

    view! {
        <Show when=move || !state.get().can_fire()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_state.update(|s| *s = s.request());
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || state.get().can_fire()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        let armed = state.get_untracked();
                        set_state.update(|s| *s = s.decline());
                        if armed.can_fire() {
                            on_confirm.run(());
                        }
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_state.update(|s| *s = s.decline());
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn declining_the_confirmation_issues_no_delete() {
        let deleted = Cell::new(0u32);

        let mut state = ConfirmState::Idle;
        state = state.request();
        state = state.decline();
        if state.can_fire() {
            deleted.set(deleted.get() + 1);
        }

        assert_eq!(deleted.get(), 0);
        assert_eq!(state, ConfirmState::Idle);
    }

    #[test]
    fn confirming_fires_the_delete_exactly_once() {
        let deleted = Cell::new(0u32);

        let state = ConfirmState::Idle.request();
        if state.can_fire() {
            deleted.set(deleted.get() + 1);
        }
        let state = state.decline();
        if state.can_fire() {
            deleted.set(deleted.get() + 1);
        }

        assert_eq!(deleted.get(), 1);
    }

    #[test]
    fn the_initial_state_cannot_fire() {
        assert!(!ConfirmState::Idle.can_fire());
    }
}
