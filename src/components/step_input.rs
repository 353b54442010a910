//! Step Input Component
//!
//! Numeric field for the step. Every edit is forwarded as typed; when the
//! session rejects the text the field snaps back to the current step.

use leptos::prelude::*;

use crate::context::use_counter;
use crate::store::{use_widget_store, WidgetStateStoreFields};

#[component]
pub fn StepInput() -> impl IntoView {
    let counter = use_counter();
    let store = use_widget_store();
    let hint_max = counter.step_hint_max;

    view! {
        <label for="step" class="self-start mb-2 font-semibold text-gray-700">
            {step_label(hint_max)}
        </label>
        <input
            id="step"
            type="number"
            min="1"
            max=hint_max.to_string()
            class="w-full p-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-400"
            aria-describedby="stepHelp"
            prop:value=move || store.step().get().to_string()
            on:input=move |ev| {
                if !counter.set_step(&event_target_value(&ev)) {
                    event_target::<web_sys::HtmlInputElement>(&ev)
                        .set_value(&counter.step().to_string());
                }
            }
        />
        <p id="stepHelp" class="text-xs mt-1 text-gray-500">
            "Choose how much to increment or decrement each time."
        </p>
    }
}

fn step_label(hint_max: i64) -> String {
    format!("Step value (1 - {}):", hint_max)
}
