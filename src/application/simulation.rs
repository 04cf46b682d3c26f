use std::time::Duration;

use rand::Rng;
use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{Algorithm, Grid};
use crate::error::Result;
use crate::rendering::Renderer;

/// Simulation owns one grid and advances it a generation at a time.
/// This is the application layer that coordinates domain logic.
pub struct Simulation {
    grid: Grid,
    algorithm: Algorithm,
    generation: u64,
    iterations: usize,
    delay: Duration,
}

impl Simulation {
    /// Create a simulation with an all-dead grid sized from `config`
    pub fn new(config: &Config) -> Self {
        Self::from_grid(Grid::new(config.width, config.height), config)
    }

    /// Start from an existing grid; `config` supplies the run parameters only
    pub fn from_grid(grid: Grid, config: &Config) -> Self {
        Self {
            grid,
            algorithm: config.algorithm,
            generation: 0,
            iterations: config.iterations,
            delay: config.delay,
        }
    }

    /// Current generation
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of advances performed so far
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Fill the grid with independent fair coin flips
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid.randomize(rng);
        debug!(population = self.grid.population(), "grid initialized");
    }

    /// Live cells around `(row, col)`, wrapping at the edges
    pub fn count_alive_neighbours(&self, row: usize, col: usize) -> u8 {
        self.grid.count_alive_neighbours(row, col)
    }

    /// Replace the grid with its next generation.
    /// The new grid is computed from an untouched snapshot before the swap.
    pub fn advance(&mut self) {
        self.grid = self.algorithm.evolve(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.grid.population(),
            "advanced"
        );
    }

    /// Drive the fixed-length loop: render, advance, pause.
    ///
    /// Stops at the first render failure.
    pub fn run<R, P>(&mut self, renderer: &mut R, mut pause: P) -> Result<()>
    where
        R: Renderer + ?Sized,
        P: FnMut(Duration),
    {
        info!(
            iterations = self.iterations,
            algorithm = self.algorithm.name(),
            width = self.grid.width(),
            height = self.grid.height(),
            "simulation started"
        );

        for _ in 0..self.iterations {
            renderer.render(&self.grid)?;
            self.advance();
            pause(self.delay);
        }

        info!(generation = self.generation, "simulation finished");
        Ok(())
    }
}
