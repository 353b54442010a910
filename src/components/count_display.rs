//! Count Display Component

use leptos::prelude::*;

use crate::store::{use_widget_store, WidgetStateStoreFields};

/// Current count, coloured by sign
#[component]
pub fn CountDisplay() -> impl IntoView {
    let store = use_widget_store();

    let class = move || {
        format!(
            "text-6xl font-extrabold mb-6 transition-colors duration-500 select-none {}",
            store.tone_class().get()
        )
    };

    view! {
        <div class=class aria-live="polite" aria-atomic="true">
            {move || store.count().get()}
        </div>
    }
}
