//! Booking Form Page
//!
//! Fully controlled booking form, prefilled from the logged-in user and the
//! test selected on the services page. A successful submission swaps the
//! form for a thank-you view; failure alerts and leaves the draft intact.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{alert, console_error};
use crate::api;
use crate::context::AppContext;
use crate::models::BookingDraft;

#[component]
pub fn BookingForm(#[prop(into)] on_back: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let draft = RwSignal::new(BookingDraft::default());
    let (booked_name, set_booked_name) = signal(Option::<String>::None);

    // Prefill from context; reruns if the user signal resolves after mount.
    Effect::new(move |_| {
        if let Some(user) = ctx.current_user.get() {
            draft.update(|d| {
                d.name = user.name.clone();
                d.email = user.email.clone();
            });
        }
        if let Some(test_name) = ctx.selected_test.get() {
            draft.update(|d| d.test_type = test_name.clone());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();

        spawn_local(async move {
            match api::create_booking(&current).await {
                Ok(_) => {
                    set_booked_name.set(Some(current.name.clone()));
                    draft.set(BookingDraft::default());
                }
                Err(err) => {
                    console_error(&format!("Booking failed: {}", err));
                    alert("Booking failed, please try again");
                }
            }
        });
    };

    view! {
        {move || match booked_name.get() {
            Some(name) => view! {
                <section class="booking booking-success">
                    <h2>"Booking Successful!"</h2>
                    <p>
                        "Thank you " <span class="booked-name">{name}</span>
                        ". Your lab test has been booked."
                    </p>
                    <button class="back-btn" on:click=move |_| on_back.run(())>
                        "Back to Home"
                    </button>
                </section>
            }.into_any(),
            None => view! {
                <section class="booking">
                    <h2>"Book a Lab Test"</h2>
                    <p>"Fill out the form to schedule your appointment."</p>

                    <form class="booking-form" on:submit=on_submit>
                        <input
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || draft.get().name
                            on:input=move |ev| draft.update(|d| d.name = event_target_value(&ev))
                        />
                        <input
                            type="email"
                            placeholder="Email"
                            prop:value=move || draft.get().email
                            on:input=move |ev| draft.update(|d| d.email = event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || draft.get().date
                            on:input=move |ev| draft.update(|d| d.date = event_target_value(&ev))
                        />
                        <input
                            type="text"
                            placeholder="Test Type"
                            prop:value=move || draft.get().test_type
                            on:input=move |ev| draft.update(|d| d.test_type = event_target_value(&ev))
                        />
                        <button type="submit" class="book-btn">"Book Now"</button>
                    </form>
                </section>
            }.into_any(),
        }}
    }
}
