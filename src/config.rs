//! Fixed simulation parameters.

use std::time::Duration;

use crate::domain::Algorithm;

pub const WIDTH: usize = 30;
pub const HEIGHT: usize = 10;
pub const ITERATIONS: usize = 100;
/// Pause between frames, in milliseconds
pub const DELAY_MS: u64 = 5;
pub const ALIVE: char = '#';
pub const DEAD: char = ' ';

/// Parameters for one simulation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Grid width in cells
    pub width: usize,
    /// Grid height in cells
    pub height: usize,
    /// Number of render/advance rounds before the run ends
    pub iterations: usize,
    /// Pause after each round
    pub delay: Duration,
    /// Glyph printed for alive cells
    pub alive: char,
    /// Glyph printed for dead cells
    pub dead: char,
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            iterations: ITERATIONS,
            delay: Duration::from_millis(DELAY_MS),
            alive: ALIVE,
            dead: DEAD,
            algorithm: Algorithm::Serial,
        }
    }
}
