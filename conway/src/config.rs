// config.rs - Seeding parameters shared by construction and reseed

use crate::error::ConfigurationError;
use crate::grid::{
    EdgePolicy, DEFAULT_LIVE_PERCENT, DENSE_LIVE_PERCENT, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Everything needed to build a fresh random world.
///
/// A `Simulator` keeps its config for the whole run, so every reseed
/// produces a world of the same shape and edge policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    /// Percent chance, 0..=100, that a cell starts alive.
    pub live_percent: u8,
    /// Fixed RNG seed for reproducible runs; entropy when `None`.
    pub seed: Option<u64>,
    pub edges: EdgePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            live_percent: DEFAULT_LIVE_PERCENT,
            seed: None,
            edges: EdgePolicy::default(),
        }
    }
}

impl Config {
    /// The 81% variant.
    pub fn dense() -> Self {
        Self {
            live_percent: DENSE_LIVE_PERCENT,
            ..Self::default()
        }
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_edges(mut self, edges: EdgePolicy) -> Self {
        self.edges = edges;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        validate_shape(self.width, self.height)?;
        validate_percent(self.live_percent)
    }
}

/// Checks the dimensions and returns the cell count `width * height`.
pub(crate) fn validate_shape(width: usize, height: usize) -> Result<usize, ConfigurationError> {
    if width == 0 || height == 0 {
        return Err(ConfigurationError::ZeroDimension { width, height });
    }
    // Cell indices must fit in isize for neighbor offsets
    width
        .checked_mul(height)
        .filter(|&len| len <= isize::MAX as usize)
        .ok_or(ConfigurationError::TooLarge { width, height })
}

pub(crate) fn validate_percent(percent: u8) -> Result<(), ConfigurationError> {
    if percent > 100 {
        return Err(ConfigurationError::LiveProbabilityOutOfRange(percent));
    }
    Ok(())
}
