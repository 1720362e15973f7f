use thiserror::Error;

/// Rejected [`HashMapConfig`](crate::HashMapConfig) values.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("initial capacity must be at least one bucket")]
    ZeroCapacity,
    #[error("load factor must be finite and at least 0.01, got {0}")]
    InvalidLoadFactor(f64),
}
