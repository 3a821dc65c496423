use rand::Rng;

use crate::config::GridSize;
use crate::snake::Cell;

/// The single food item on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    position: Cell,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn at(position: Cell) -> Self {
        Self { position }
    }

    /// Creates food at a uniformly random cell.
    #[must_use]
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Self {
        Self::at(random_cell(rng, grid))
    }

    /// Moves the food to a uniformly random cell.
    ///
    /// Cells under the snake are not excluded: food may land on the body.
    pub fn respawn<R: Rng + ?Sized>(&mut self, rng: &mut R, grid: GridSize) {
        self.position = random_cell(rng, grid);
    }

    #[must_use]
    pub fn position(&self) -> Cell {
        self.position
    }
}

/// Draws column and row independently and uniformly over the grid.
#[must_use]
pub fn random_cell<R: Rng + ?Sized>(rng: &mut R, grid: GridSize) -> Cell {
    Cell {
        col: rng.gen_range(0..i32::from(grid.width)),
        row: rng.gen_range(0..i32::from(grid.height)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::GridSize;
    use crate::input::Direction;
    use crate::snake::{Cell, Snake};

    use super::Food;

    #[test]
    fn respawn_stays_on_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = GridSize {
            width: 40,
            height: 30,
        };
        let mut food = Food::at(Cell::new(0, 0));

        for _ in 0..500 {
            food.respawn(&mut rng, grid);
            assert!(food.position().is_within_bounds(grid));
        }
    }

    #[test]
    fn respawn_reaches_every_cell_including_snake_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = GridSize {
            width: 4,
            height: 3,
        };
        let snake = Snake::from_segments(
            vec![Cell::new(0, 0), Cell::new(1, 0), Cell::new(2, 0)],
            Direction::Left,
        );
        let mut food = Food::spawn(&mut rng, grid);
        let mut seen = HashSet::new();

        for _ in 0..2_000 {
            food.respawn(&mut rng, grid);
            seen.insert(food.position());
        }

        assert_eq!(seen.len(), grid.total_cells());
        assert!(seen.iter().any(|cell| snake.occupies(*cell)));
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let grid = GridSize {
            width: 40,
            height: 30,
        };
        let mut first = StdRng::seed_from_u64(3);
        let mut second = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            assert_eq!(Food::spawn(&mut first, grid), Food::spawn(&mut second, grid));
        }
    }
}
