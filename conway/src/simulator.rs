// simulator.rs - B3/S23 generation advance, reseeding and cycle history

use std::collections::hash_map::DefaultHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Config;
use crate::error::ConfigurationError;
use crate::grid::HISTORY_LEN;
use crate::patterns::Pattern;
use crate::world::World;

/// Next state of one cell from its current state and live-neighbor count.
pub fn rule(alive: bool, neighbors: u8) -> bool {
    match neighbors {
        0 | 1 => false, // Isolation
        2     => alive, // Unchanged
        3     => true,  // Birth or survival
        _     => false, // Overpopulation
    }
}

/// Builds the next generation into a fresh buffer, reading only `world`.
pub fn next_field(world: &World) -> Vec<bool> {
    world
        .cells()
        .iter()
        .enumerate()
        .map(|(i, &alive)| rule(alive, world.count_neighbors(i)))
        .collect()
}

/// Advances `world` by one generation, replacing its field in one swap.
pub fn advance(world: &mut World) {
    let next = next_field(world);
    world.replace_grid(next);
}

fn hash_field(cells: &[bool]) -> u64 {
    let mut hasher = DefaultHasher::new();
    cells.hash(&mut hasher);
    hasher.finish()
}

fn rng_for(config: &Config) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Owns the current world and drives it one tick at a time.
///
/// Per tick the caller advances, then applies any pending reseed, then
/// reads the field for rendering. Nothing here blocks or spawns.
pub struct Simulator {
    world: World,
    config: Config,
    rng: StdRng,
    generation: u64,
    history: VecDeque<u64>,
    settled: bool,
}

impl Simulator {
    /// Random world built from `config`.
    pub fn new(config: Config) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let mut rng = rng_for(&config);
        let world = World::with_rng(config.width, config.height, config.live_percent, &mut rng)?
            .with_edges(config.edges);
        tracing::debug!(
            width = config.width,
            height = config.height,
            live_percent = config.live_percent,
            seed = ?config.seed,
            population = world.population(),
            "seeded world"
        );
        Ok(Self::from_parts(world, config, rng))
    }

    /// Starts from `pattern` at `origin` instead of random noise.
    ///
    /// Later reseeds still use `config`'s random fill.
    pub fn with_pattern(
        config: Config,
        pattern: &Pattern,
        origin: (usize, usize),
    ) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let rng = rng_for(&config);
        let world = World::from_pattern(config.width, config.height, pattern, origin)?
            .with_edges(config.edges);
        tracing::debug!(pattern = pattern.name, ?origin, "seeded world from pattern");
        Ok(Self::from_parts(world, config, rng))
    }

    fn from_parts(world: World, config: Config, rng: StdRng) -> Self {
        let mut history = VecDeque::with_capacity(HISTORY_LEN);
        history.push_back(hash_field(world.cells()));
        Self {
            world,
            config,
            rng,
            generation: 0,
            history,
            settled: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generations since the last seed.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True once a generation repeats one of the last `HISTORY_LEN`.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// One tick of the simulation.
    pub fn advance(&mut self) {
        advance(&mut self.world);
        self.generation += 1;

        let hash = hash_field(self.world.cells());
        if !self.settled && self.history.contains(&hash) {
            self.settled = true;
            tracing::info!(generation = self.generation, "world settled into a cycle");
        }
        if self.history.len() == HISTORY_LEN {
            self.history.pop_front();
        }
        self.history.push_back(hash);

        tracing::trace!(
            generation = self.generation,
            population = self.world.population(),
            "advanced"
        );
    }

    /// Throws the current world away and builds a new random one of the
    /// same shape. On error the current world is left untouched.
    pub fn reseed(&mut self) -> Result<(), ConfigurationError> {
        let world = World::with_rng(
            self.config.width,
            self.config.height,
            self.config.live_percent,
            &mut self.rng,
        )?
        .with_edges(self.config.edges);

        tracing::debug!(
            after = self.generation,
            population = world.population(),
            "reseeded world"
        );

        self.world = world;
        self.generation = 0;
        self.settled = false;
        self.history.clear();
        self.history.push_back(hash_field(self.world.cells()));
        Ok(())
    }
}
