//! Counter Session
//!
//! One mounted widget: the state machine, its persisted count and the
//! auto-increment driver. User actions and timer firings both go through
//! [`Shared::apply`], which persists changed counts and notifies the
//! listener.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, info};

use crate::config::CounterConfig;
use crate::state::{Bounds, CounterState};
use crate::storage::{KeyValueStore, PersistedCount};
use crate::timer::{AutoIncrement, Scheduler};

type Listener = Box<dyn Fn(&CounterState)>;

struct Shared<K> {
    state: RefCell<CounterState>,
    persisted: PersistedCount<K>,
    listener: RefCell<Option<Listener>>,
}

impl<K: KeyValueStore> Shared<K> {
    fn apply(&self, transition: impl FnOnce(&mut CounterState)) -> CounterState {
        let (before, after) = {
            let mut state = self.state.borrow_mut();
            let before = *state;
            transition(&mut state);
            (before, *state)
        };
        if after.count() != before.count() {
            self.persisted.save(after.count());
        }
        if after != before {
            if let Some(listener) = self.listener.borrow().as_ref() {
                listener(&after);
            }
        }
        after
    }
}

/// A mounted counter widget
pub struct CounterSession<K: KeyValueStore + 'static, S: Scheduler> {
    shared: Rc<Shared<K>>,
    driver: RefCell<AutoIncrement<S>>,
    torn_down: Cell<bool>,
}

impl<K: KeyValueStore + 'static, S: Scheduler> CounterSession<K, S> {
    /// Load the persisted count (clamped into the configured bounds), write
    /// it back, and start with the configured step and auto-increment off.
    pub fn mount(store: K, scheduler: S, config: &CounterConfig) -> Self {
        let bounds = config.bounds();
        let persisted = PersistedCount::new(store, config.storage_key.clone());
        let count = bounds.clamp(persisted.load());
        persisted.save(count);
        info!("mounted counter at {} (key `{}`)", count, persisted.key());

        Self {
            shared: Rc::new(Shared {
                state: RefCell::new(CounterState::new(bounds, count, config.initial_step)),
                persisted,
                listener: RefCell::new(None),
            }),
            driver: RefCell::new(AutoIncrement::new(scheduler, config.interval_ms)),
            torn_down: Cell::new(false),
        }
    }

    pub fn state(&self) -> CounterState {
        *self.shared.state.borrow()
    }

    pub fn bounds(&self) -> Bounds {
        self.state().bounds()
    }

    /// Whether an auto-increment registration is live
    pub fn is_ticking(&self) -> bool {
        self.driver.borrow().is_running()
    }

    /// Install the change listener, replacing any previous one. It runs
    /// after every transition that changed the state and must not call
    /// `subscribe` itself.
    pub fn subscribe(&self, listener: impl Fn(&CounterState) + 'static) {
        *self.shared.listener.borrow_mut() = Some(Box::new(listener));
    }

    pub fn increment(&self) -> CounterState {
        self.shared.apply(CounterState::increment)
    }

    pub fn decrement(&self) -> CounterState {
        self.shared.apply(CounterState::decrement)
    }

    pub fn reset(&self) -> CounterState {
        self.shared.apply(CounterState::reset)
    }

    /// Apply raw step-field input. Invalid input is ignored and returns
    /// `false`. A new step restarts a running auto-increment with it.
    pub fn set_step(&self, input: &str) -> bool {
        let before = self.state().step();
        let mut accepted = false;
        let after = self.shared.apply(|state| accepted = state.set_step(input));
        if !accepted {
            debug!("ignoring step input {:?}", input);
            return false;
        }
        if after.step() != before && after.auto_increment() {
            self.sync_timer();
        }
        true
    }

    /// Turn auto-increment on or off. Ignored after teardown.
    pub fn toggle_auto(&self, on: bool) {
        if self.torn_down.get() {
            debug!("ignoring auto-increment toggle on a torn-down session");
            return;
        }
        let before = self.state().auto_increment();
        self.shared.apply(|state| state.set_auto_increment(on));
        if before != on {
            self.sync_timer();
        }
    }

    /// Cancel any running timer, switch auto-increment off and detach the
    /// listener. The session stays usable for manual transitions but never
    /// schedules again. Safe to call more than once.
    pub fn teardown(&self) {
        if self.torn_down.replace(true) {
            return;
        }
        self.shared.listener.borrow_mut().take();
        self.shared.apply(|state| state.set_auto_increment(false));
        if self.driver.borrow_mut().stop() {
            debug!("auto-increment cancelled on teardown");
        }
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.get()
    }

    fn sync_timer(&self) {
        let state = self.state();
        let mut driver = self.driver.borrow_mut();
        if state.auto_increment() && !self.torn_down.get() {
            let step = state.step();
            let shared: Weak<Shared<K>> = Rc::downgrade(&self.shared);
            driver.start(move || {
                if let Some(shared) = shared.upgrade() {
                    shared.apply(|state| state.increment_by(step));
                }
            });
            debug!("auto-increment every {} ms by {}", driver.period_ms(), step);
        } else if driver.stop() {
            debug!("auto-increment stopped at {}", state.count());
        }
    }
}

impl<K: KeyValueStore + 'static, S: Scheduler> Drop for CounterSession<K, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
