// error.rs - Construction failures for worlds and simulators

/// Rejected construction of a world or simulator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("world dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("world of {width}x{height} cells is too large to allocate")]
    TooLarge { width: usize, height: usize },
    #[error("live probability must be within 0..=100 percent, got {0}")]
    LiveProbabilityOutOfRange(u8),
    #[error("field holds {actual} cells, expected {expected}")]
    FieldLengthMismatch { expected: usize, actual: usize },
}
