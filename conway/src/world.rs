// world.rs - The flat row-major field and its neighbor count

use rand::Rng;

use crate::config::{validate_percent, validate_shape};
use crate::error::ConfigurationError;
use crate::grid::{EdgePolicy, NEIGHBOR_OFFSETS};
use crate::patterns::{self, Pattern};

/// One generation of the board.
///
/// The field is row-major, `index = y * width + x`, and its length is
/// `width * height` for the lifetime of the world. It is only ever
/// replaced as a whole, never edited cell by cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    grid: Vec<bool>,
    width: usize,
    height: usize,
    edges: EdgePolicy,
}

impl World {
    /// Random world where each cell is alive with `live_percent`% chance.
    pub fn new(width: usize, height: usize, live_percent: u8) -> Result<Self, ConfigurationError> {
        Self::with_rng(width, height, live_percent, &mut rand::thread_rng())
    }

    /// Same as [`World::new`] but draws from the caller's RNG.
    pub fn with_rng<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        live_percent: u8,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        let len = validate_shape(width, height)?;
        validate_percent(live_percent)?;

        let p = f64::from(live_percent) / 100.0;
        let grid = (0..len).map(|_| rng.gen_bool(p)).collect();
        Ok(Self { grid, width, height, edges: EdgePolicy::default() })
    }

    /// World with an explicit field.
    pub fn from_cells(width: usize, height: usize, grid: Vec<bool>) -> Result<Self, ConfigurationError> {
        let expected = validate_shape(width, height)?;
        if grid.len() != expected {
            return Err(ConfigurationError::FieldLengthMismatch { expected, actual: grid.len() });
        }
        Ok(Self { grid, width, height, edges: EdgePolicy::default() })
    }

    /// Dead world with `pattern` placed at `origin`; cells off the field are dropped.
    pub fn from_pattern(
        width: usize,
        height: usize,
        pattern: &Pattern,
        origin: (usize, usize),
    ) -> Result<Self, ConfigurationError> {
        let len = validate_shape(width, height)?;
        let mut grid = vec![false; len];
        patterns::stamp(&mut grid, width, height, pattern, origin);
        Ok(Self { grid, width, height, edges: EdgePolicy::default() })
    }

    pub fn with_edges(mut self, edges: EdgePolicy) -> Self {
        self.edges = edges;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn edges(&self) -> EdgePolicy {
        self.edges
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// The current generation, row-major.
    pub fn cells(&self) -> &[bool] {
        &self.grid
    }

    /// `None` when (x, y) is off the field.
    pub fn is_alive(&self, x: usize, y: usize) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.grid[y * self.width + x])
    }

    pub fn population(&self) -> usize {
        self.grid.iter().filter(|&&alive| alive).count()
    }

    /// Live cells among the eight around `index`, honoring the edge policy.
    ///
    /// `index` must be below `self.len()`.
    pub fn count_neighbors(&self, index: usize) -> u8 {
        let width = self.width as isize;
        let height = self.height as isize;
        let bounds = self.grid.len() as isize;
        let x = index as isize % width;
        let y = index as isize / width;

        let mut count = 0;
        for &(dx, dy) in &NEIGHBOR_OFFSETS {
            let neighbor = match self.edges {
                EdgePolicy::Bounded => {
                    let (nx, ny) = (x + dx, y + dy);
                    if nx < 0 || nx >= width || ny < 0 || ny >= height {
                        continue;
                    }
                    ny * width + nx
                }
                EdgePolicy::LinearIndex => {
                    let n = (y + dy) * width + (x + dx);
                    if n <= 0 || n >= bounds {
                        continue;
                    }
                    n
                }
            };
            if self.grid[neighbor as usize] {
                count += 1;
            }
        }
        count
    }

    /// Swaps in the next generation. The old field is dropped.
    pub(crate) fn replace_grid(&mut self, next: Vec<bool>) {
        debug_assert_eq!(next.len(), self.grid.len());
        self.grid = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::BLOCK;
    use rand::{rngs::StdRng, SeedableRng};

    fn world_with(width: usize, height: usize, live: &[usize]) -> World {
        let mut grid = vec![false; width * height];
        for &i in live {
            grid[i] = true;
        }
        World::from_cells(width, height, grid).unwrap()
    }

    #[test]
    fn new_allocates_full_field() {
        let w = World::new(32, 24, 40).unwrap();
        assert_eq!(w.width(), 32);
        assert_eq!(w.height(), 24);
        assert_eq!(w.len(), 32 * 24);
    }

    #[test]
    fn zero_dimension_fails_fast() {
        assert_eq!(
            World::new(0, 5, 40),
            Err(ConfigurationError::ZeroDimension { width: 0, height: 5 })
        );
        assert!(World::from_cells(5, 0, Vec::new()).is_err());
        assert!(World::from_pattern(0, 0, &BLOCK, (0, 0)).is_err());
    }

    #[test]
    fn oversized_dimensions_fail_fast() {
        let too_large = ConfigurationError::TooLarge { width: usize::MAX, height: 2 };
        assert_eq!(World::new(usize::MAX, 2, 0), Err(too_large.clone()));
        assert_eq!(World::from_cells(usize::MAX, 2, Vec::new()), Err(too_large.clone()));
        assert_eq!(World::from_pattern(usize::MAX, 2, &BLOCK, (0, 0)), Err(too_large));
    }

    #[test]
    fn percent_extremes() {
        let empty = World::new(10, 10, 0).unwrap();
        assert_eq!(empty.population(), 0);
        let full = World::new(10, 10, 100).unwrap();
        assert_eq!(full.population(), 100);
        assert!(World::new(10, 10, 150).is_err());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = World::with_rng(40, 30, 40, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = World::with_rng(40, 30, 40, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.cells(), b.cells());
    }

    #[test]
    fn worlds_do_not_share_storage() {
        let a = World::new(8, 8, 50).unwrap();
        let mut b = a.clone();
        b.replace_grid(vec![true; 64]);
        assert_ne!(a.cells().as_ptr(), b.cells().as_ptr());
        assert_eq!(b.population(), 64);
    }

    #[test]
    fn from_cells_checks_length() {
        assert_eq!(
            World::from_cells(3, 3, vec![false; 8]),
            Err(ConfigurationError::FieldLengthMismatch { expected: 9, actual: 8 })
        );
    }

    #[test]
    fn is_alive_is_row_major() {
        let w = world_with(4, 3, &[6]);
        assert_eq!(w.is_alive(2, 1), Some(true));
        assert_eq!(w.is_alive(1, 2), Some(false));
        assert_eq!(w.is_alive(4, 0), None);
        assert_eq!(w.is_alive(0, 3), None);
    }

    #[test]
    fn interior_cell_counts_all_eight() {
        let live: Vec<usize> = (0..9).filter(|&i| i != 4).collect();
        let w = world_with(3, 3, &live);
        assert_eq!(w.count_neighbors(4), 8);
    }

    #[test]
    fn own_cell_is_not_counted() {
        let w = world_with(3, 3, &[4]);
        assert_eq!(w.count_neighbors(4), 0);
    }

    #[test]
    fn corner_cell_sees_three() {
        let w = world_with(3, 3, &[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(w.count_neighbors(0), 3);
        assert_eq!(w.count_neighbors(8), 3);
    }

    #[test]
    fn bounded_edges_do_not_bleed_across_rows() {
        // (2,0) is the last column of row 0; index 3 is (0,1)
        let w = world_with(3, 3, &[3]);
        assert_eq!(w.count_neighbors(2), 0);
    }

    #[test]
    fn linear_edges_bleed_across_rows() {
        let w = world_with(3, 3, &[3]).with_edges(EdgePolicy::LinearIndex);
        assert_eq!(w.count_neighbors(2), 1);
    }

    #[test]
    fn linear_edges_never_count_index_zero() {
        let bounded = world_with(3, 3, &[0]);
        let linear = bounded.clone().with_edges(EdgePolicy::LinearIndex);
        assert_eq!(bounded.count_neighbors(1), 1);
        assert_eq!(linear.count_neighbors(1), 0);
    }

    #[test]
    fn policies_agree_in_the_interior() {
        let w = World::with_rng(12, 12, 50, &mut StdRng::seed_from_u64(3)).unwrap();
        let linear = w.clone().with_edges(EdgePolicy::LinearIndex);
        for y in 2..10 {
            for x in 2..10 {
                let i = y * 12 + x;
                assert_eq!(w.count_neighbors(i), linear.count_neighbors(i), "cell ({x}, {y})");
            }
        }
    }
}
