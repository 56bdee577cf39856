//! Scheduler and per-category configuration.
//!
//! Both structs are plain data, typically authored outside the engine
//! (CSV via [`crate::loader`], or any serde format with the `serde` feature).

use pace_core::CategoryId;

/// Buffer capacity given to plans added without a capacity hint.
pub const DEFAULT_PLAN_CAPACITY: usize = 8;

/// Construction parameters for [`EventScheduler`][crate::EventScheduler].
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerConfig {
    /// Jitter RNG seed.  `0` is replaced by [`pace_core::DEFAULT_SEED`].
    pub seed: u64,

    /// Initial schedule-buffer capacity for plans added without a hint.
    pub default_capacity: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            seed:             pace_core::DEFAULT_SEED,
            default_capacity: DEFAULT_PLAN_CAPACITY,
        }
    }
}

/// One category's authored pacing parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanConfig {
    pub category_id: CategoryId,

    /// Human-readable label; not used by the scheduler.
    pub name: String,

    /// Target events per second (≥ 0).
    pub rate: f64,

    /// Maximum per-event offset within a window, as a fraction of one second.
    pub jitter: f64,

    /// Initial buffer capacity.  `None` uses the scheduler default.
    pub capacity: Option<usize>,
}

impl PlanConfig {
    pub fn new(category_id: CategoryId, rate: f64) -> Self {
        Self {
            category_id,
            name: String::new(),
            rate,
            jitter: 0.0,
            capacity: None,
        }
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }
}
