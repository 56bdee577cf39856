//! `pace-pulse` — fixed-interval heartbeat for frame-driven consumers.
//!
//! | Module       | Contents                                          |
//! |--------------|---------------------------------------------------|
//! | [`clock`]    | `PulseClock`, `PulseConfig`, `Pulse`              |
//! | [`observer`] | `Subscription` handles and the ordered registry   |
//! | [`error`]    | `PulseError`, `PulseResult<T>`                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let mut clock = PulseClock::new(PulseConfig::from_hz(20))?;
//! let sub = clock.subscribe_pulse(|p| println!("pulse {}", p.seq));
//! loop {
//!     clock.advance(frame_dt);
//! }
//! ```

pub mod clock;
pub mod error;
pub mod observer;


pub use clock::{DEFAULT_MAX_PULSES_PER_CALL, DEFAULT_PULSE_HZ, Pulse, PulseClock, PulseConfig};
pub use error::{PulseError, PulseResult};
pub use observer::Subscription;
