use super::{Cell, Grid};

/// Represents a pattern that can be placed on the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Place pattern with its top-left corner at `(row, col)`.
    /// Cells falling off an edge wrap to the opposite one.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for (dr, dc) in &self.cells {
            grid.set_wrapped(row + dr, col + dc, Cell::Alive);
        }
    }

    /// Fresh grid containing only this pattern at `(row, col)`
    pub fn on_empty(&self, width: usize, height: usize, row: usize, col: usize) -> Grid {
        let mut grid = Grid::new(width, height);
        self.place_on(&mut grid, row, col);
        grid
    }
}

/// Classic Game of Life patterns that fit the console grid
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves one cell down-right every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![(0, 0), (0, 1), (0, 2)],
        )
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// R-pentomino - small seed with long chaotic growth
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }
}
