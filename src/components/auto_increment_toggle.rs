//! Auto-Increment Toggle Component

use leptos::prelude::*;

use crate::context::use_counter;
use crate::store::{use_widget_store, WidgetStateStoreFields};

/// Start/stop button for the auto-increment timer
#[component]
pub fn AutoIncrementToggle() -> impl IntoView {
    let counter = use_counter();
    let store = use_widget_store();
    let running = move || store.auto_increment().get();

    view! {
        <div class="mt-6 flex gap-3 w-full">
            <button
                class=move || toggle_class(running())
                on:click=move |_| counter.toggle_auto(!store.auto_increment().get_untracked())
            >
                {move || toggle_label(running())}
            </button>
        </div>
    }
}

fn toggle_label(running: bool) -> &'static str {
    if running {
        "Stop Auto-Increment"
    } else {
        "Start Auto-Increment"
    }
}

fn toggle_class(running: bool) -> &'static str {
    if running {
        "flex-1 bg-red-600 text-white py-3 rounded-lg hover:bg-red-700 transition-colors"
    } else {
        "flex-1 bg-blue-600 text-white py-3 rounded-lg hover:bg-blue-700 transition-colors"
    }
}
