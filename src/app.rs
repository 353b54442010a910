//! Step Counter App
//!
//! Mounts the counter session and lays out the counter card.

use leptos::prelude::*;
use reactive_stores::Store;

use counter_core::{Bounds, CounterSession};

use crate::components::{AutoIncrementToggle, CountDisplay, CounterControls, PreviewRow, StepInput};
use crate::context::CounterContext;
use crate::platform::{self, IntervalScheduler};
use crate::store::{store_sync, WidgetState};

#[component]
pub fn App() -> impl IntoView {
    let config = platform::load_config();
    let session = CounterSession::mount(platform::page_storage(), IntervalScheduler, &config);

    // Mirror every session change (clicks and timer ticks) into the store
    let store = Store::new(WidgetState::from(&session.state()));
    session.subscribe(move |state| store_sync(&store, state));

    let counter = CounterContext::new(session, config.step_hint_max);
    provide_context(store);
    provide_context(counter);

    // Timer must not outlive the component
    on_cleanup(move || counter.teardown());

    let limits = limits_text(config.bounds());

    view! {
        <main class="h-full flex flex-col items-center justify-center p-6">
            <h1 class="text-4xl font-bold mb-8 text-gray-800 select-none">
                "Rust Counter App"
            </h1>

            <div class="bg-white shadow-lg rounded-xl p-8 w-full max-w-sm flex flex-col items-center">
                <CountDisplay />
                <PreviewRow />
                <CounterControls />
                <StepInput />
                <AutoIncrementToggle />
                <p class="mt-6 text-sm text-gray-600 select-none">{limits}</p>
            </div>
        </main>
    }
}

fn limits_text(bounds: Bounds) -> String {
    format!("Limits: {} ≤ count ≤ {}", bounds.min, bounds.max)
}
