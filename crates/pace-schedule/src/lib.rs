//! `pace-schedule` — per-category rate plans and the windowed event scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`quantize`]  | `quantize`, `Carry` (error-diffusion integerizer)         |
//! | [`buffer`]    | `ScheduleBuffer` (power-of-two growth, never shrinks)     |
//! | [`plan`]      | `Plan`, `WINDOW_EPSILON`                                  |
//! | [`scheduler`] | `EventScheduler`                                          |
//! | [`config`]    | `SchedulerConfig`, `PlanConfig`                           |
//! | [`loader`]    | `load_plan_configs_csv`, `load_plan_configs_reader`       |
//! | [`error`]     | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Window model (summary)
//!
//! Time is cut into repeating one-second windows.  At every rollover each
//! plan draws an integer event count from its fractional rate:
//!
//! ```text
//! count      = quantize(rate, &mut carry)      // 2.5/s → 2, 3, 2, 3, …
//! times[i]   = (i + 1) / (count + 1) ± jitter  // clamped, then sorted
//! ```
//!
//! Each frame the driver calls `advance(dt, on_due)` and receives, per
//! category, how many of those times the clock has just passed.

pub mod buffer;
pub mod config;
pub mod error;
pub mod loader;
pub mod plan;
pub mod quantize;
pub mod scheduler;


pub use buffer::ScheduleBuffer;
pub use config::{DEFAULT_PLAN_CAPACITY, PlanConfig, SchedulerConfig};
pub use error::{ScheduleError, ScheduleResult};
pub use loader::{load_plan_configs_csv, load_plan_configs_reader};
pub use plan::{Plan, WINDOW_EPSILON};
pub use quantize::{Carry, quantize};
pub use scheduler::EventScheduler;
