//! `Plan` — per-category scheduling state.
//!
//! # Window model
//!
//! Time inside a plan is a fraction of the current one-second window.  On
//! every rollover the plan draws its event count from the quantizer and lays
//! the events out evenly with a margin at both window edges:
//!
//! ```text
//! count = 3     0 ────●────●────●──── 1
//!                    1/4  2/4  3/4
//! ```
//!
//! Each slot is then perturbed by up to `±jitter`, clamped into
//! `[WINDOW_EPSILON, 1 - WINDOW_EPSILON]` and the whole window re-sorted,
//! since jitter can swap neighbouring slots.
//!
//! During the window a cursor walks the sorted times; everything at or below
//! the current clock position is due.

use pace_core::{CategoryId, JitterRng};

use crate::buffer::ScheduleBuffer;
use crate::quantize::{Carry, quantize};

/// Keeps scheduled times off the exact window boundaries so a jittered event
/// never coincides with the next window's start.
pub const WINDOW_EPSILON: f64 = 1e-6;

/// Scheduling state for one category.
#[derive(Debug)]
pub struct Plan {
    id:     CategoryId,
    rate:   f64,
    jitter: f64,
    carry:  Carry,
    times:  ScheduleBuffer,
    cursor: usize,
}

impl Plan {
    /// New plan with zero carry and an empty schedule.
    ///
    /// Negative or non-finite `jitter` is stored as `0`.
    pub fn new(id: CategoryId, rate: f64, jitter: f64, capacity: usize) -> Self {
        Self {
            id,
            rate,
            jitter: sanitize_jitter(jitter),
            carry: Carry::ZERO,
            times: ScheduleBuffer::with_capacity(capacity),
            cursor: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> CategoryId {
        self.id
    }

    /// Target events per second.  Changes apply from the next rebuild.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[inline]
    pub fn jitter(&self) -> f64 {
        self.jitter
    }

    #[inline]
    pub fn carry(&self) -> f64 {
        self.carry.value()
    }

    /// The current window's event times, ascending.
    #[inline]
    pub fn scheduled(&self) -> &[f64] {
        self.times.as_slice()
    }

    /// Index of the next undelivered time.
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Events still pending in the current window.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.times.len() - self.cursor
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.times.capacity()
    }

    // ── Mutators ──────────────────────────────────────────────────────────

    pub fn set_rate(&mut self, rate: f64) {
        self.rate = rate;
    }

    pub fn set_jitter(&mut self, jitter: f64) {
        self.jitter = sanitize_jitter(jitter);
    }

    /// Lay out the schedule for the upcoming window using the current rate
    /// and jitter.  Returns the number of events scheduled.
    pub fn rebuild(&mut self, rng: &mut JitterRng) -> u32 {
        let count = quantize(self.rate, &mut self.carry);
        self.cursor = 0;
        self.times.clear();

        if count == 0 {
            return 0;
        }

        let n = count as usize;
        self.times.reserve_pow2(n);

        let denom = (n + 1) as f64;
        let jitter = self.jitter;
        self.times.fill_with(n, |i| {
            let t = (i + 1) as f64 / denom + rng.jitter(jitter);
            t.clamp(WINDOW_EPSILON, 1.0 - WINDOW_EPSILON)
        });
        self.times.sort_ascending();

        count
    }

    /// Advance the cursor past every time `≤ elapsed` and return how many
    /// events that delivered.
    pub fn drain(&mut self, elapsed: f64) -> u32 {
        let mut due = 0;
        while let Some(t) = self.times.get(self.cursor) {
            if t > elapsed {
                break;
            }
            self.cursor += 1;
            due += 1;
        }
        due
    }
}

fn sanitize_jitter(jitter: f64) -> f64 {
    if jitter.is_finite() { jitter.max(0.0) } else { 0.0 }
}
