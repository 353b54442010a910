//! Preview Row Component
//!
//! Shows where the next decrement and increment would land.

use leptos::prelude::*;

use crate::store::{use_widget_store, WidgetStateStoreFields};

#[component]
pub fn PreviewRow() -> impl IntoView {
    let store = use_widget_store();

    view! {
        <div class="flex justify-between w-full mb-6 text-gray-500 select-none font-mono">
            <span>"Prev: " {move || store.prev_value().get()}</span>
            <span>"Next: " {move || store.next_value().get()}</span>
        </div>
    }
}
