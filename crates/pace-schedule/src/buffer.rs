//! `ScheduleBuffer` — power-of-two storage for one window's event times.
//!
//! Capacity is tracked separately from length.  When a rebuild needs more
//! slots than the buffer holds, capacity jumps to the next power of two at
//! or above the request; it never shrinks, so a plan whose rate oscillates
//! stops allocating once it has seen its peak window.
//!
//! Contents are not carried across growth.  Every rebuild overwrites
//! `[0, len)` from scratch.

/// Window-local event times, sorted ascending after [`sort_ascending`].
///
/// [`sort_ascending`]: ScheduleBuffer::sort_ascending
#[derive(Clone, Debug)]
pub struct ScheduleBuffer {
    slots: Box<[f64]>,
    len:   usize,
}

impl ScheduleBuffer {
    /// Allocate with room for `capacity` times (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity.max(1)].into_boxed_slice(),
            len:   0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all stored times; capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Grow to the next power of two ≥ `needed` if the current capacity is
    /// smaller.  Existing contents are discarded on growth.
    pub fn reserve_pow2(&mut self, needed: usize) {
        if self.slots.len() >= needed {
            return;
        }
        let new_cap = needed.next_power_of_two();
        self.slots = vec![0.0; new_cap].into_boxed_slice();
        self.len = 0;
    }

    /// Overwrite the first `count` slots with `f(i)` and set the length.
    ///
    /// # Panics
    /// Panics if `count > capacity()`; call [`reserve_pow2`] first.
    ///
    /// [`reserve_pow2`]: ScheduleBuffer::reserve_pow2
    pub fn fill_with<F: FnMut(usize) -> f64>(&mut self, count: usize, mut f: F) {
        for (i, slot) in self.slots[..count].iter_mut().enumerate() {
            *slot = f(i);
        }
        self.len = count;
    }

    /// Sort the live region ascending.
    pub fn sort_ascending(&mut self) {
        self.slots[..self.len].sort_unstable_by(f64::total_cmp);
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.slots[..self.len]
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.as_slice().get(i).copied()
    }
}
