//! Auto-Increment Timer Driver
//!
//! A [`Scheduler`] hands out one [`RepeatingTask`] per registration. The
//! [`AutoIncrement`] driver owns at most one task and cancels it before
//! establishing another, on `stop`, and on drop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Handle to a registered repeating action
pub trait RepeatingTask {
    /// Cancel the registration. No firing happens after this returns.
    fn cancel(self);
}

/// Source of repeating actions (browser intervals, virtual clocks)
pub trait Scheduler {
    type Task: RepeatingTask;

    /// Run `action` every `period_ms` until the returned task is cancelled
    fn every(&self, period_ms: u32, action: Box<dyn FnMut()>) -> Self::Task;
}

/// Owner of the single auto-increment registration
pub struct AutoIncrement<S: Scheduler> {
    scheduler: S,
    period_ms: u32,
    task: Option<S::Task>,
}

impl<S: Scheduler> AutoIncrement<S> {
    pub fn new(scheduler: S, period_ms: u32) -> Self {
        Self { scheduler, period_ms, task: None }
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// (Re)establish the repeating action, cancelling any previous one first
    pub fn start(&mut self, tick: impl FnMut() + 'static) {
        self.stop();
        self.task = Some(self.scheduler.every(self.period_ms, Box::new(tick)));
    }

    /// Cancel the running action. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        match self.task.take() {
            Some(task) => {
                task.cancel();
                true
            }
            None => false,
        }
    }
}

impl<S: Scheduler> Drop for AutoIncrement<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

// ========================
// Virtual clock
// ========================

type Action = Rc<RefCell<Box<dyn FnMut()>>>;

struct Registration {
    id: u64,
    period_ms: u64,
    due_ms: u64,
    action: Action,
}

#[derive(Default)]
struct Clock {
    now_ms: u64,
    next_id: u64,
    registrations: Vec<Registration>,
}

/// Deterministic scheduler driven by [`advance`](ManualScheduler::advance).
/// Clones share one clock.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.borrow().now_ms
    }

    /// Number of live registrations
    pub fn active_tasks(&self) -> usize {
        self.clock.borrow().registrations.len()
    }

    /// Move the clock forward by `ms`, firing every action that comes due
    /// in order. Returns the number of firings.
    pub fn advance(&self, ms: u64) -> usize {
        let target = self.clock.borrow().now_ms + ms;
        let mut fired = 0;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let Some(reg) = clock
                    .registrations
                    .iter_mut()
                    .filter(|reg| reg.due_ms <= target)
                    .min_by_key(|reg| (reg.due_ms, reg.id))
                else {
                    break;
                };
                let now = reg.due_ms;
                reg.due_ms += reg.period_ms;
                let action = Rc::clone(&reg.action);
                clock.now_ms = now;
                action
            };
            // Clock borrow is released so the action may cancel tasks
            (due.borrow_mut())();
            fired += 1;
        }
        self.clock.borrow_mut().now_ms = target;
        fired
    }
}

impl Scheduler for ManualScheduler {
    type Task = ManualTask;

    fn every(&self, period_ms: u32, action: Box<dyn FnMut()>) -> ManualTask {
        let mut clock = self.clock.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let period_ms = u64::from(period_ms.max(1));
        let due_ms = clock.now_ms + period_ms;
        clock.registrations.push(Registration {
            id,
            period_ms,
            due_ms,
            action: Rc::new(RefCell::new(action)),
        });
        ManualTask { id, clock: Rc::downgrade(&self.clock) }
    }
}

/// Registration on a [`ManualScheduler`]; also released on drop
pub struct ManualTask {
    id: u64,
    clock: Weak<RefCell<Clock>>,
}

impl ManualTask {
    fn release(&self) {
        if let Some(clock) = self.clock.upgrade() {
            clock.borrow_mut().registrations.retain(|reg| reg.id != self.id);
        }
    }
}

impl RepeatingTask for ManualTask {
    fn cancel(self) {
        self.release();
    }
}

impl Drop for ManualTask {
    fn drop(&mut self) {
        self.release();
    }
}
