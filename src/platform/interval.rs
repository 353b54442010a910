//! Interval Timers
//!
//! `setInterval` through `gloo-timers`. Dropping or cancelling the
//! [`Interval`] clears the browser timer.

use counter_core::{RepeatingTask, Scheduler};
use gloo_timers::callback::Interval;

/// Schedules actions on the browser event loop
#[derive(Clone, Copy, Default)]
pub struct IntervalScheduler;

pub struct IntervalTask(Interval);

impl RepeatingTask for IntervalTask {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

impl Scheduler for IntervalScheduler {
    type Task = IntervalTask;

    fn every(&self, period_ms: u32, action: Box<dyn FnMut()>) -> IntervalTask {
        IntervalTask(Interval::new(period_ms, action))
    }
}
