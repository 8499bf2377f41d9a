// grid.rs - Grid sizing constants and the edge policy for neighbor lookups

pub const SCREEN_WIDTH: usize = 320;        // Default field width in cells
pub const SCREEN_HEIGHT: usize = 240;       // Default field height in cells
pub const DEFAULT_LIVE_PERCENT: u8 = 40;    // Seed density for the standard world
pub const DENSE_LIVE_PERCENT: u8 = 81;      // Seed density for the dense variant
pub const HISTORY_LEN: usize = 10;          // Generations remembered for cycle checks

/// How neighbor lookups treat positions past the border of the field.
///
/// Neither policy wraps around the torus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// True Moore neighborhood clipped at every border.
    #[default]
    Bounded,
    /// Bounds-checks the flat index only, so the first and last columns
    /// see cells of the adjacent rows and index 0 is never counted.
    LinearIndex,
}

/// Moore neighborhood offsets as (dx, dy), row by row.
pub(crate) const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1,  0),          (1,  0),
    (-1,  1), (0,  1), (1,  1),
];
