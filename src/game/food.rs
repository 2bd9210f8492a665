use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;
use rand::Rng;

use super::error::GameError;
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Random samples tried before switching to an exhaustive scan. Rejection
/// sampling is cheap while the board is mostly empty but degrades once the
/// snake covers most of it.
const MAX_SAMPLE_ATTEMPTS: usize = 64;

/// Places food on free cells.
pub struct FoodSpawner {
    rng: ThreadRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }

    /// Pick a uniformly random cell that the snake does not occupy.
    ///
    /// Returns `GridFull` when no free cell exists instead of retrying
    /// forever.
    pub fn spawn(&mut self, snake: &Snake, grid: &Grid) -> Result<Cell, GameError> {
        if snake.len() >= grid.cell_count() {
            return Err(GameError::GridFull);
        }

        let size = grid.size() as i32;
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let cell = Cell::new(self.rng.gen_range(0..size), self.rng.gen_range(0..size));
            if !snake.occupies(cell) {
                return Ok(cell);
            }
        }

        // Near-full board: enumerate the free cells and pick among them.
        let free: Vec<Cell> = grid.cells().filter(|c| !snake.occupies(*c)).collect();
        free.choose(&mut self.rng).copied().ok_or(GameError::GridFull)
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
