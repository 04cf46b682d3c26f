//! Algorithm enum for selecting the evolution implementation.

use super::Grid;

/// Available evolution strategies.
/// Both produce identical generations; they differ only in how the work is scheduled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Cell-by-cell iterator pipeline on the calling thread
    #[default]
    Serial,
    /// Same per-cell rule spread across the rayon thread pool
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for logs and benchmark tables
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Compute the next generation of `grid` with this strategy
    pub fn evolve(&self, grid: &Grid) -> Grid {
        match self {
            Algorithm::Serial => grid.evolve(),
            Algorithm::Parallel => grid.evolve_parallel(),
        }
    }
}
