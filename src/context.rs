//! Counter Context
//!
//! The mounted session, provided via the Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use counter_core::{CounterSession, KeyValueStore};

use crate::platform::IntervalScheduler;

/// Session type used by the page
pub type PageSession = CounterSession<Rc<dyn KeyValueStore>, IntervalScheduler>;

/// Handle to the page's counter session
#[derive(Clone, Copy)]
pub struct CounterContext {
    session: StoredValue<PageSession, LocalStorage>,
    /// Upper value shown on the step field (hint only)
    pub step_hint_max: i64,
}

impl CounterContext {
    pub fn new(session: PageSession, step_hint_max: i64) -> Self {
        Self {
            session: StoredValue::new_local(session),
            step_hint_max,
        }
    }

    pub fn increment(&self) {
        self.session.with_value(|s| {
            s.increment();
        });
    }

    pub fn decrement(&self) {
        self.session.with_value(|s| {
            s.decrement();
        });
    }

    pub fn reset(&self) {
        self.session.with_value(|s| {
            s.reset();
        });
    }

    /// Forward raw step-field input. Returns `false` when the session
    /// rejected it and kept the previous step.
    pub fn set_step(&self, input: &str) -> bool {
        self.session.with_value(|s| s.set_step(input))
    }

    /// Step currently applied by the session
    pub fn step(&self) -> i64 {
        self.session.with_value(|s| s.state().step())
    }

    pub fn toggle_auto(&self, on: bool) {
        self.session.with_value(|s| s.toggle_auto(on));
    }

    /// Stop the auto-increment timer. No-op once the session is disposed.
    pub fn teardown(&self) {
        let _ = self.session.try_with_value(|s| s.teardown());
    }
}

/// Get the counter context
pub fn use_counter() -> CounterContext {
    expect_context::<CounterContext>()
}
