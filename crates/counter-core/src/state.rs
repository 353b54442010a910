//! Counter State Machine
//!
//! Every mutation clamps `count` into [`Bounds`], so no sequence of
//! transitions can leave the range. Arithmetic saturates before clamping,
//! which keeps huge steps from overflowing.

/// Closed interval the count lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(0, 100)
    }
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Snap `value` to the nearest bound if it falls outside
    pub fn clamp(&self, value: i64) -> i64 {
        value.max(self.min).min(self.max)
    }
}

/// Display colour of the count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    /// Unreachable while the lower bound is non-negative
    Negative,
    Zero,
}

impl Tone {
    pub fn of(count: i64) -> Self {
        if count > 0 {
            Tone::Positive
        } else if count < 0 {
            Tone::Negative
        } else {
            Tone::Zero
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Tone::Positive => "text-green-600",
            Tone::Negative => "text-red-600",
            Tone::Zero => "text-gray-600",
        }
    }
}

/// Snapshot of the widget: count, step, auto-increment flag and bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    count: i64,
    step: i64,
    auto_increment: bool,
    bounds: Bounds,
}

impl CounterState {
    /// Build a state with `count` clamped into `bounds`.
    /// A non-positive `step` falls back to 1.
    pub fn new(bounds: Bounds, count: i64, step: i64) -> Self {
        Self {
            count: bounds.clamp(count),
            step: if step > 0 { step } else { 1 },
            auto_increment: false,
            bounds,
        }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn auto_increment(&self) -> bool {
        self.auto_increment
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn increment(&mut self) {
        self.increment_by(self.step);
    }

    /// Increment with an explicit step, as captured by a running timer
    pub fn increment_by(&mut self, step: i64) {
        self.count = self.bounds.clamp(self.count.saturating_add(step));
    }

    pub fn decrement(&mut self) {
        self.count = self.bounds.clamp(self.count.saturating_sub(self.step));
    }

    pub fn reset(&mut self) {
        self.count = self.bounds.clamp(0);
    }

    /// Apply raw step-field input. Returns `false` (leaving the step alone)
    /// when the input is not a positive integer.
    pub fn set_step(&mut self, input: &str) -> bool {
        match parse_step(input) {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn set_auto_increment(&mut self, on: bool) {
        self.auto_increment = on;
    }

    /// Value one decrement away
    pub fn prev(&self) -> i64 {
        self.bounds.clamp(self.count.saturating_sub(self.step))
    }

    /// Value one increment away
    pub fn next(&self) -> i64 {
        self.bounds.clamp(self.count.saturating_add(self.step))
    }

    pub fn can_decrement(&self) -> bool {
        self.count > self.bounds.min
    }

    pub fn can_increment(&self) -> bool {
        self.count < self.bounds.max
    }

    pub fn tone(&self) -> Tone {
        Tone::of(self.count)
    }
}

/// Parse step-field input the way `parseInt(value, 10)` does: leading
/// whitespace, an optional sign, then the longest run of digits. Anything
/// after the digits is ignored. Only positive results are accepted.
pub fn parse_step(input: &str) -> Option<i64> {
    parse_int_prefix(input).filter(|step| *step > 0)
}

fn parse_int_prefix(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = rest
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a persisted count as a JavaScript `Number`: surrounding
/// whitespace, decimals and exponents are accepted and truncated toward
/// zero. Non-finite values are rejected. Callers clamp the result.
pub(crate) fn parse_stored_count(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if let Ok(count) = trimmed.parse::<i64>() {
        return Some(count);
    }
    let value: f64 = trimmed.parse().ok()?;
    // `as` saturates at the i64 range
    value.is_finite().then(|| value.trunc() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(count: i64, step: i64) -> CounterState {
        CounterState::new(Bounds::default(), count, step)
    }

    #[test]
    fn test_increment_saturates_at_max() {
        let mut s = state(98, 5);
        s.increment();
        assert_eq!(s.count(), 100);
        s.increment();
        assert_eq!(s.count(), 100);
        assert!(!s.can_increment());
    }

    #[test]
    fn test_decrement_saturates_at_min() {
        let mut s = state(3, 5);
        s.decrement();
        assert_eq!(s.count(), 0);
        assert!(!s.can_decrement());
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut s = state(37, 1);
        s.reset();
        assert_eq!(s.count(), 0);
        s.reset();
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn test_huge_step_does_not_overflow() {
        let mut s = state(50, 1);
        assert!(s.set_step(&i64::MAX.to_string()));
        s.increment();
        assert_eq!(s.count(), 100);
        s.decrement();
        assert_eq!(s.count(), 0);
    }

    #[test]
    fn test_new_clamps_count_and_step() {
        let s = state(250, 0);
        assert_eq!(s.count(), 100);
        assert_eq!(s.step(), 1);
        assert_eq!(state(-7, 3).count(), 0);
    }

    #[test]
    fn test_prev_next_preview() {
        let s = state(10, 4);
        assert_eq!(s.prev(), 6);
        assert_eq!(s.next(), 14);
        let edge = state(2, 4);
        assert_eq!(edge.prev(), 0);
        let top = state(99, 4);
        assert_eq!(top.next(), 100);
    }

    #[test]
    fn test_rejected_step_inputs_keep_previous_step() {
        let mut s = state(0, 7);
        for input in ["-3", "abc", "0", "", "   ", "-", "+"] {
            assert!(!s.set_step(input), "input {input:?} should be rejected");
            assert_eq!(s.step(), 7);
        }
    }

    #[test]
    fn test_step_parsing_follows_parse_int() {
        assert_eq!(parse_step("5"), Some(5));
        assert_eq!(parse_step("  12"), Some(12));
        assert_eq!(parse_step("+8"), Some(8));
        assert_eq!(parse_step("12abc"), Some(12));
        assert_eq!(parse_step("3.9"), Some(3));
        assert_eq!(parse_step("25"), Some(25));
        assert_eq!(parse_step("-0"), None);
        assert_eq!(parse_step("abc12"), None);
        assert_eq!(parse_step("99999999999999999999999"), None);
    }

    #[test]
    fn test_stored_count_parsing() {
        assert_eq!(parse_stored_count("42"), Some(42));
        assert_eq!(parse_stored_count(" 42\n"), Some(42));
        assert_eq!(parse_stored_count("-4"), Some(-4));
        assert_eq!(parse_stored_count("4.5"), Some(4));
        assert_eq!(parse_stored_count("-4.5"), Some(-4));
        assert_eq!(parse_stored_count("1e2"), Some(100));
        assert_eq!(parse_stored_count("1e300"), Some(i64::MAX));
        assert_eq!(parse_stored_count("NaN"), None);
        assert_eq!(parse_stored_count("inf"), None);
        assert_eq!(parse_stored_count("forty"), None);
        assert_eq!(parse_stored_count(""), None);
    }

    #[test]
    fn test_tone_classes() {
        assert_eq!(Tone::of(5), Tone::Positive);
        assert_eq!(Tone::of(0), Tone::Zero);
        assert_eq!(Tone::of(-1), Tone::Negative);
        assert_eq!(Tone::Positive.css_class(), "text-green-600");
        assert_eq!(Tone::Negative.css_class(), "text-red-600");
        assert_eq!(Tone::Zero.css_class(), "text-gray-600");
    }

    #[derive(Debug, Clone)]
    enum Op {
        Increment,
        Decrement,
        Reset,
        Step(String),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            Just(Op::Increment),
            Just(Op::Decrement),
            Just(Op::Reset),
            any::<i32>().prop_map(|v| Op::Step(v.to_string())),
            "[ a-z0-9+-]{0,6}".prop_map(Op::Step),
        ]
    }

    proptest! {
        #[test]
        fn prop_increment_is_saturating(count in 0i64..=100, step in 1i64..=1_000) {
            let mut s = state(count, step);
            s.increment();
            prop_assert_eq!(s.count(), (count + step).min(100));
        }

        #[test]
        fn prop_decrement_is_saturating(count in 0i64..=100, step in 1i64..=1_000) {
            let mut s = state(count, step);
            s.decrement();
            prop_assert_eq!(s.count(), (count - step).max(0));
        }

        #[test]
        fn prop_count_stays_in_bounds(start in 0i64..=100, ops in proptest::collection::vec(op(), 0..64)) {
            let mut s = state(start, 1);
            for op in ops {
                match op {
                    Op::Increment => s.increment(),
                    Op::Decrement => s.decrement(),
                    Op::Reset => s.reset(),
                    Op::Step(input) => { s.set_step(&input); }
                }
                prop_assert!((0..=100).contains(&s.count()));
                prop_assert!(s.step() > 0);
                prop_assert_ne!(s.tone(), Tone::Negative);
            }
        }
    }
}
