//! Error-diffusion rate quantizer.
//!
//! A plan's rate is fractional (2.5 events/s) but each window must emit an
//! integer number of events.  The fractional part is accumulated in a
//! [`Carry`] across windows and paid out one extra event whenever it reaches
//! a whole unit, Bresenham-style:
//!
//! ```text
//! whole = floor(rate)
//! frac  = rate - whole
//! carry += frac
//! extra = floor(carry)
//! carry = max(0, carry - extra)
//! count = whole + extra
//! ```
//!
//! Over `N` windows the emitted total stays within one event of `rate * N`,
//! with no systematic bias in either direction.

/// Fractional accumulator in `[0, 1)`.
///
/// Lives for the lifetime of a plan; rate changes never reset it.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Carry(f64);

impl Carry {
    pub const ZERO: Carry = Carry(0.0);

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Integer event count for the next window at `rate` events/second.
///
/// Non-positive and non-finite rates yield `0` and leave `carry` untouched.
pub fn quantize(rate: f64, carry: &mut Carry) -> u32 {
    if !rate.is_finite() || rate <= 0.0 {
        return 0;
    }

    let whole = rate.floor();
    let frac = rate - whole;

    carry.0 += frac;
    let extra = carry.0.floor();
    carry.0 = (carry.0 - extra).max(0.0);

    (whole as u32).saturating_add(extra as u32)
}
