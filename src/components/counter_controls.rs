//! Counter Controls Component
//!
//! Decrement, reset and increment buttons. The bound-side buttons disable
//! themselves once the count reaches that bound.

use leptos::prelude::*;

use crate::context::use_counter;
use crate::store::{use_widget_store, WidgetStateStoreFields};

/// Row of counter buttons
#[component]
pub fn CounterControls() -> impl IntoView {
    let counter = use_counter();
    let store = use_widget_store();

    view! {
        <div class="flex gap-3 mb-6 w-full">
            <button
                class="flex-1 bg-red-500 text-white py-3 rounded-lg hover:bg-red-600 transition-colors disabled:opacity-50"
                disabled=move || !store.can_decrement().get()
                aria-label=move || format!("Decrement by {}", store.step().get())
                on:click=move |_| counter.decrement()
            >
                "- Decrement"
            </button>
            <button
                class="flex-1 bg-gray-400 text-white py-3 rounded-lg hover:bg-gray-500 transition-colors"
                aria-label="Reset counter"
                on:click=move |_| counter.reset()
            >
                "Reset"
            </button>
            <button
                class="flex-1 bg-green-500 text-white py-3 rounded-lg hover:bg-green-600 transition-colors disabled:opacity-50"
                disabled=move || !store.can_increment().get()
                aria-label=move || format!("Increment by {}", store.step().get())
                on:click=move |_| counter.increment()
            >
                "+ Increment"
            </button>
        </div>
    }
}
