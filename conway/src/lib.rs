//! Game of Life core: a fixed-size boolean field stepped with the B3/S23
//! rule, plus reseeding. No windowing or I/O lives here; callers read
//! [`World::cells`] once per tick and ask the [`Simulator`] to advance or
//! reseed.

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod simulator;
pub mod world;

pub use config::Config;
pub use error::ConfigurationError;
pub use grid::EdgePolicy;
pub use simulator::{advance, next_field, rule, Simulator};
pub use world::World;
