//! Widget State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The session is
//! the source of truth; this store mirrors it, derived values included, so
//! components only read fields.

use leptos::prelude::*;
use reactive_stores::Store;

use counter_core::CounterState;

/// Render-ready view of the counter with field-level reactivity
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct WidgetState {
    pub count: i64,
    pub step: i64,
    pub auto_increment: bool,
    /// Preview of the next decrement
    pub prev_value: i64,
    /// Preview of the next increment
    pub next_value: i64,
    pub can_decrement: bool,
    pub can_increment: bool,
    /// CSS class for the count colour
    pub tone_class: &'static str,
}

impl From<&CounterState> for WidgetState {
    fn from(state: &CounterState) -> Self {
        Self {
            count: state.count(),
            step: state.step(),
            auto_increment: state.auto_increment(),
            prev_value: state.prev(),
            next_value: state.next(),
            can_decrement: state.can_decrement(),
            can_increment: state.can_increment(),
            tone_class: state.tone().css_class(),
        }
    }
}

/// Type alias for the store
pub type WidgetStore = Store<WidgetState>;

/// Get the widget store from context
pub fn use_widget_store() -> WidgetStore {
    expect_context::<WidgetStore>()
}

/// Copy a session snapshot into the store, touching only changed fields
pub fn store_sync(store: &WidgetStore, state: &CounterState) {
    let view = WidgetState::from(state);
    if store.count().get_untracked() != view.count {
        store.count().set(view.count);
    }
    if store.step().get_untracked() != view.step {
        store.step().set(view.step);
    }
    if store.auto_increment().get_untracked() != view.auto_increment {
        store.auto_increment().set(view.auto_increment);
    }
    if store.prev_value().get_untracked() != view.prev_value {
        store.prev_value().set(view.prev_value);
    }
    if store.next_value().get_untracked() != view.next_value {
        store.next_value().set(view.next_value);
    }
    if store.can_decrement().get_untracked() != view.can_decrement {
        store.can_decrement().set(view.can_decrement);
    }
    if store.can_increment().get_untracked() != view.can_increment {
        store.can_increment().set(view.can_increment);
    }
    if store.tone_class().get_untracked() != view.tone_class {
        store.tone_class().set(view.tone_class);
    }
}
