//! Statistic counters that count up from zero once they scroll into view.
//!
//! The animation is modelled as a plain state machine so any frame source can
//! drive it: the browser adapter calls [`CounterAnimation::tick`] from
//! `requestAnimationFrame`, tests call it in a loop.

use crate::error::{Result, SiteError};

/// The statistic rendered as "45+" rather than "45".
pub const PLUS_SUFFIX_TARGET: i64 = 45;

/// Default number of frames a counter takes to reach its target.
pub const DEFAULT_STEPS: f64 = 50.0;

/// Attribute on `.stat-number` elements holding the final value.
pub const TARGET_ATTR: &str = "data-target";

/// Advance a running total by one frame.
///
/// Once `current` has reached `target` the value no longer moves.
#[inline]
pub fn step(current: f64, target: f64, increment: f64) -> f64 {
    if current < target {
        current + increment
    } else {
        current
    }
}

/// Text shown once the animation completes.
pub fn final_label(target: i64, plus_suffix_target: i64) -> String {
    if target == plus_suffix_target {
        format!("{target}+")
    } else {
        target.to_string()
    }
}

/// Parse a `data-target` attribute the way browsers parse integers out of
/// markup: leading whitespace, an optional sign, then as many digits as are
/// present. Trailing text such as `"45+"` is ignored.
pub fn parse_target(raw: &str) -> Result<i64> {
    let invalid = |reason: &str| SiteError::InvalidCounterTarget {
        raw: raw.to_string(),
        reason: reason.to_string(),
    };
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return Err(invalid("no leading digits"));
    }
    let value: i64 = digits[..end]
        .parse()
        .map_err(|e: std::num::ParseIntError| invalid(&e.to_string()))?;
    Ok(if negative { -value } else { value })
}

/// One rendered frame of a counter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterFrame {
    pub text: String,
    /// No further frames need to be scheduled.
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    current: f64,
    increment: f64,
    plus_suffix_target: i64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: i64) -> Self {
        Self::with_steps(target, DEFAULT_STEPS, PLUS_SUFFIX_TARGET)
    }

    pub fn with_steps(target: i64, steps: f64, plus_suffix_target: i64) -> Self {
        Self {
            target,
            current: 0.0,
            increment: target as f64 / steps,
            plus_suffix_target,
            finished: false,
        }
    }

    pub fn target(&self) -> i64 {
        self.target
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn increment(&self) -> f64 {
        self.increment
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Render the next frame.
    ///
    /// While below the target this shows the rounded-up running total; the
    /// first call made at or past the target shows the final label and marks
    /// the animation done. Calls after that keep returning the final label.
    pub fn tick(&mut self) -> CounterFrame {
        let target = self.target as f64;
        if !self.finished && self.current < target {
            self.current = step(self.current, target, self.increment);
            return CounterFrame {
                text: format!("{}", self.current.ceil() as i64),
                done: false,
            };
        }
        if !self.finished {
            log::debug!("counter reached {}", self.target);
        }
        self.finished = true;
        CounterFrame {
            text: final_label(self.target, self.plus_suffix_target),
            done: true,
        }
    }

    /// Drive the animation to completion, collecting every frame.
    pub fn frames(mut self) -> Vec<CounterFrame> {
        let mut out = Vec::new();
        loop {
            let frame = self.tick();
            let done = frame.done;
            out.push(frame);
            if done {
                return out;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_target() {
        assert_eq!(step(0.0, 10.0, 2.5), 2.5);
        assert_eq!(step(10.0, 10.0, 2.5), 10.0);
        assert_eq!(step(12.5, 10.0, 2.5), 12.5);
    }

    #[test]
    fn parse_like_markup_integers() {
        assert_eq!(parse_target("45").unwrap(), 45);
        assert_eq!(parse_target("  120 members").unwrap(), 120);
        assert_eq!(parse_target("45+").unwrap(), 45);
        assert_eq!(parse_target("-3").unwrap(), -3);
        assert!(parse_target("").is_err());
        assert!(parse_target("abc").is_err());
    }

    #[test]
    fn zero_target_finishes_immediately() {
        let frames = CounterAnimation::new(0).frames();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "0");
        assert!(frames[0].done);
    }
}
