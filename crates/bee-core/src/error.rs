use thiserror::Error;

/// Errors raised while loading or checking a guard configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid guard config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("polytope has {rows} rows in A but {bounds} bounds in b")]
    RowCountMismatch { rows: usize, bounds: usize },
    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
    #[error("soft limit must be positive, got {0}")]
    NonPositiveSoftLimit(f64),
    #[error("hard limit {hard} must exceed soft limit {soft}")]
    ThresholdOrder { soft: f64, hard: f64 },
    #[error("mixture weights sum to {0}, expected 1.0")]
    WeightSum(f64),
    #[error("throttle cap must lie in [0, 1], got {0}")]
    ThrottleCap(f64),
}
