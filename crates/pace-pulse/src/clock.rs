//! `PulseClock` — fixed-rate heartbeat driven by variable frame deltas.
//!
//! # Catch-up model
//!
//! ```text
//! accumulator += delta
//! while accumulator ≥ interval and fired < max_pulses_per_call:
//!     accumulator -= interval
//!     notify pulse observers
//! if the cap was hit and accumulator ≥ interval still:
//!     accumulator = 0            // excess discarded, not queued
//! ```
//!
//! After a long stall (debugger pause, window drag) the clock fires at most
//! `max_pulses_per_call` pulses and forgets the rest, so one frame never pays
//! for the whole stall.
//!
//! There is no global instance.  Construct a clock where the frame loop
//! lives and hand `&mut PulseClock` to whoever needs to subscribe.

use log::debug;

use crate::observer::{Registry, Subscription, SubscriptionSource};
use crate::{PulseError, PulseResult};

/// Default pulse frequency.
pub const DEFAULT_PULSE_HZ: u32 = 20;

/// Default catch-up cap.
pub const DEFAULT_MAX_PULSES_PER_CALL: u32 = 3;

// ── PulseConfig ───────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PulseConfig {
    /// Seconds between pulses.  Must be finite and > 0.
    pub interval_secs: f64,

    /// Most pulses fired by a single [`PulseClock::advance`].  Must be ≥ 1.
    pub max_pulses_per_call: u32,
}

impl PulseConfig {
    /// Config firing `hz` times per second with the default catch-up cap.
    pub fn from_hz(hz: u32) -> Self {
        Self {
            interval_secs:       1.0 / hz as f64,
            max_pulses_per_call: DEFAULT_MAX_PULSES_PER_CALL,
        }
    }

    pub fn validate(&self) -> PulseResult<()> {
        if !self.interval_secs.is_finite() || self.interval_secs <= 0.0 {
            return Err(PulseError::Interval(self.interval_secs));
        }
        if self.max_pulses_per_call == 0 {
            return Err(PulseError::ZeroCatchUp);
        }
        Ok(())
    }
}

impl Default for PulseConfig {
    fn default() -> Self {
        Self::from_hz(DEFAULT_PULSE_HZ)
    }
}

// ── Pulse ─────────────────────────────────────────────────────────────────────

/// One heartbeat, as seen by pulse observers.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Pulse {
    /// Pulses fired by this clock before this one.
    pub seq: u64,
}

type PulseFn = Box<dyn FnMut(Pulse)>;
type TeardownFn = Box<dyn FnOnce()>;

// ── PulseClock ────────────────────────────────────────────────────────────────

/// Fixed-interval pulse generator with bounded catch-up.
///
/// Teardown observers run exactly once, in subscription order, when the
/// clock is dropped.  No pulse can fire after that.
pub struct PulseClock {
    config:      PulseConfig,
    accumulator: f64,
    total:       u64,
    subs:        SubscriptionSource,
    on_pulse:    Registry<PulseFn>,
    on_teardown: Registry<TeardownFn>,
}

impl PulseClock {
    pub fn new(config: PulseConfig) -> PulseResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            accumulator: 0.0,
            total:       0,
            subs:        SubscriptionSource::default(),
            on_pulse:    Registry::new(),
            on_teardown: Registry::new(),
        })
    }

    // ── Subscriptions ─────────────────────────────────────────────────────

    /// Call `f` on every pulse, after all earlier subscribers.
    pub fn subscribe_pulse<F>(&mut self, f: F) -> Subscription
    where
        F: FnMut(Pulse) + 'static,
    {
        let sub = self.subs.next();
        self.on_pulse.insert(sub, Box::new(f));
        sub
    }

    /// Call `f` once when the clock is torn down.
    pub fn subscribe_teardown<F>(&mut self, f: F) -> Subscription
    where
        F: FnOnce() + 'static,
    {
        let sub = self.subs.next();
        self.on_teardown.insert(sub, Box::new(f));
        sub
    }

    /// Remove a pulse or teardown observer.  `false` if `sub` is not (or no
    /// longer) registered.
    pub fn unsubscribe(&mut self, sub: Subscription) -> bool {
        self.on_pulse.remove(sub) || self.on_teardown.remove(sub)
    }

    pub fn pulse_observer_count(&self) -> usize {
        self.on_pulse.len()
    }

    pub fn teardown_observer_count(&self) -> usize {
        self.on_teardown.len()
    }

    // ── Advance ───────────────────────────────────────────────────────────

    /// Accumulate `delta` seconds and fire any pulses that became due.
    /// Returns the number fired.
    ///
    /// Negative and non-finite deltas are ignored.
    pub fn advance(&mut self, delta: f64) -> u32 {
        if !delta.is_finite() || delta < 0.0 {
            debug!("pulse clock ignoring invalid delta {delta}");
            return 0;
        }

        self.accumulator += delta;

        let interval = self.config.interval_secs;
        let cap = self.config.max_pulses_per_call;
        let mut fired = 0;
        while self.accumulator >= interval && fired < cap {
            self.accumulator -= interval;
            let pulse = Pulse { seq: self.total };
            for observer in self.on_pulse.iter_mut() {
                observer(pulse);
            }
            self.total += 1;
            fired += 1;
        }

        if fired == cap && self.accumulator >= interval {
            debug!(
                "pulse catch-up capped at {cap}; discarding {:.3}s",
                self.accumulator
            );
            self.accumulator = 0.0;
        }

        fired
    }

    /// Zero the accumulator.  Subscriptions and the pulse count are kept.
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    // ── Inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Pulses fired since construction.
    #[inline]
    pub fn total_pulses(&self) -> u64 {
        self.total
    }

    #[inline]
    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    /// Tear the clock down now; equivalent to dropping it.
    pub fn shutdown(self) {
        drop(self);
    }
}

impl Drop for PulseClock {
    fn drop(&mut self) {
        for teardown in self.on_teardown.drain() {
            teardown();
        }
    }
}

impl std::fmt::Debug for PulseClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulseClock")
            .field("config", &self.config)
            .field("accumulator", &self.accumulator)
            .field("total", &self.total)
            .field("pulse_observers", &self.on_pulse.len())
            .field("teardown_observers", &self.on_teardown.len())
            .finish()
    }
}
