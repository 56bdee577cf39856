use thiserror::Error;

#[derive(Debug, Error)]
pub enum PulseError {
    #[error("pulse interval must be finite and > 0, got {0}")]
    Interval(f64),

    #[error("max pulses per call must be at least 1")]
    ZeroCatchUp,
}

pub type PulseResult<T> = Result<T, PulseError>;
