use super::Cell;
use rand::Rng;
use rayon::prelude::*;

/// Grid holds a fixed-size toroidal field of cells.
///
/// Cells are stored row-major in one owned buffer and addressed as
/// `(row, col)`. Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as `(width, height)`
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        (row < self.height && col < self.width).then(|| self.cells[self.get_index(row, col)])
    }

    /// Set cell at position, ignoring out-of-bounds coordinates
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        if row < self.height && col < self.width {
            let idx = self.get_index(row, col);
            self.cells[idx] = cell;
        }
    }

    /// Set cell at position, wrapping coordinates around the torus
    pub fn set_wrapped(&mut self, row: usize, col: usize, cell: Cell) {
        if self.cells.is_empty() {
            return;
        }
        let idx = self.get_index(row % self.height, col % self.width);
        self.cells[idx] = cell;
    }

    /// Count live cells in the Moore neighbourhood of `(row, col)`.
    ///
    /// Neighbour coordinates wrap modulo the grid dimensions, so edge cells
    /// see the opposite edge. The cell itself is never counted.
    pub fn count_alive_neighbours(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < self.height && col < self.width);

        (0..3)
            .flat_map(|dr| (0..3).map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 1 || dc != 1)
            .map(|(dr, dc)| {
                // Offsets are shifted by one to stay unsigned
                let r = (row + self.height + dr - 1) % self.height;
                let c = (col + self.width + dc - 1) % self.width;
                self.cells[self.get_index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    fn next_cell(&self, idx: usize) -> Cell {
        let (row, col) = (idx / self.width, idx % self.width);
        self.cells[idx].evolve(self.count_alive_neighbours(row, col))
    }

    /// Compute the next generation from this snapshot (serial).
    ///
    /// `self` is left untouched; every neighbour count sees pre-advance
    /// values.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.cells.len()).map(|idx| self.next_cell(idx)).collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Parallel evolution using rayon, identical result to [`Grid::evolve`]
    pub fn evolve_parallel(&self) -> Self {
        let cells: Vec<Cell> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_cell(idx))
            .collect();

        Self {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Set every cell alive or dead with probability 1/2 each
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random::<bool>()));
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        // chunks() rejects a zero size
        self.cells.chunks(self.width.max(1))
    }

    /// Iterate over all cells with their `(row, col)` positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.width, idx % self.width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(row, col) in alive {
            grid.set(row, col, Cell::Alive);
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(30, 10);
        assert_eq!(grid.dimensions(), (30, 10));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.get(2, 3), Some(Cell::Dead));
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 4), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_ignored() {
        let mut grid = Grid::new(4, 3);
        grid.set(3, 0, Cell::Alive);
        grid.set(0, 4, Cell::Alive);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_set_wrapped() {
        let mut grid = Grid::new(4, 3);
        grid.set_wrapped(4, 5, Cell::Alive);
        assert_eq!(grid.get(1, 1), Some(Cell::Alive));
    }

    #[test]
    fn test_count_interior() {
        let grid = grid_with(5, 5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(grid.count_alive_neighbours(1, 1), 3);
        assert_eq!(grid.count_alive_neighbours(0, 0), 1);
        assert_eq!(grid.count_alive_neighbours(3, 3), 1);
        assert_eq!(grid.count_alive_neighbours(4, 4), 0);
    }

    #[test]
    fn test_count_excludes_self() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(grid.count_alive_neighbours(2, 2), 0);
    }

    #[test]
    fn test_count_wraps_corners() {
        let grid = grid_with(30, 10, &[(9, 29)]);
        assert_eq!(grid.count_alive_neighbours(0, 0), 1);
        assert_eq!(grid.count_alive_neighbours(0, 28), 1);
        assert_eq!(grid.count_alive_neighbours(8, 0), 1);
        assert_eq!(grid.count_alive_neighbours(5, 5), 0);
    }

    #[test]
    fn test_count_full_grid_is_eight() {
        let mut grid = Grid::new(6, 6);
        for row in 0..6 {
            for col in 0..6 {
                grid.set(row, col, Cell::Alive);
            }
        }
        assert_eq!(grid.count_alive_neighbours(0, 0), 8);
        assert_eq!(grid.count_alive_neighbours(3, 2), 8);
    }

    #[test]
    fn test_evolve_does_not_mutate_snapshot() {
        let grid = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);
        let before = grid.clone();
        let next = grid.evolve();
        assert_eq!(grid, before);
        // Horizontal blinker turns vertical
        assert_eq!(next, grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]));
    }

    #[test]
    fn test_parallel_matches_serial() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(64, 48);
        grid.randomize(&mut rng);
        for _ in 0..5 {
            let serial = grid.evolve();
            assert_eq!(serial, grid.evolve_parallel());
            grid = serial;
        }
    }

    #[test]
    fn test_randomize_is_roughly_half() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut grid = Grid::new(100, 100);
        grid.randomize(&mut rng);
        let population = grid.population();
        assert!(population > 4_000 && population < 6_000, "population {population}");
    }

    #[test]
    fn test_rows_shape() {
        let grid = Grid::new(30, 10);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 10);
        assert!(rows.iter().all(|row| row.len() == 30));
    }
}
