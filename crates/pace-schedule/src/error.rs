use thiserror::Error;

use pace_core::CategoryId;

/// Errors raised by the scheduler and the plan loader.
///
/// `NoPlans` and `InvalidDelta` are wiring bugs in the driver, not runtime
/// conditions; see [`ScheduleError::is_misuse`].
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("advance called with no plans registered")]
    NoPlans,

    #[error("advance called with invalid delta {0} (must be finite and non-negative)")]
    InvalidDelta(f64),

    #[error("plan config parse error: {0}")]
    Parse(String),

    #[error("duplicate plan config for {0}")]
    DuplicateCategory(CategoryId),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ScheduleError {
    /// `true` for caller-misuse conditions that callers should treat as fatal.
    pub fn is_misuse(&self) -> bool {
        matches!(self, ScheduleError::NoPlans | ScheduleError::InvalidDelta(_))
    }
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
