//! Lab Services Page
//!
//! Customer-facing catalogue. One fetch on mount; loading, error, empty and
//! populated states are mutually exclusive. Clicking a test card selects it
//! for the booking page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::console_error;
use crate::api;
use crate::context::AppContext;
use crate::format::{format_price, truncate_description};
use crate::models::LabTest;

#[component]
pub fn LabServices(#[prop(into)] on_book: Callback<String>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (tests, set_tests) = signal(Vec::<LabTest>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_tests().await {
                Ok(loaded) => set_tests.set(loaded),
                Err(err) => {
                    console_error(&format!("Failed to fetch tests: {}", err));
                    set_error.set(Some("Failed to fetch tests".to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let book_test = move |name: String| {
        ctx.select_test(Some(name.clone()));
        on_book.run(name);
    };

    view! {
        <section class="services">
            <h2>"Explore Our Lab Services"</h2>

            <div class="category-cards">
                <div class="category-card">
                    <span class="category-icon">"🩸"</span>
                    <h4>"Blood Test"</h4>
                    <p>"Accurate and fast blood tests."</p>
                </div>
                <div class="category-card">
                    <span class="category-icon">"🦠"</span>
                    <h4>"COVID-19 Test"</h4>
                    <p>"RT-PCR and Antigen options."</p>
                </div>
                <div class="category-card">
                    <span class="category-icon">"🧪"</span>
                    <h4>"Urine Analysis"</h4>
                    <p>"Detailed urinalysis report."</p>
                </div>
            </div>

            {move || if loading.get() {
                view! { <p class="state-note">"Loading lab tests..."</p> }.into_any()
            } else if let Some(message) = error.get() {
                view! { <p class="state-note error">{message}</p> }.into_any()
            } else if tests.get().is_empty() {
                view! { <p class="state-note">"No lab tests available."</p> }.into_any()
            } else {
                view! {
                    <div class="test-cards">
                        <For
                            each=move || tests.get()
                            key=|test| test.id.clone()
                            children=move |test| {
                                let name = test.name.clone();
                                view! {
                                    <div class="test-card" on:click=move |_| book_test(name.clone())>
                                        <span class="test-emoji">{test.emoji.clone().unwrap_or_default()}</span>
                                        <h4>{test.name.clone()}</h4>
                                        <p class="test-description">
                                            {truncate_description(test.description.as_deref().unwrap_or(""))}
                                        </p>
                                        <p class="test-category">{format!("Category: {}", test.category)}</p>
                                        <p class="test-price">{format!("KES {}", format_price(test.price))}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                }.into_any()
            }}
        </section>
    }
}
