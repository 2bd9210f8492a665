use super::direction::Direction;
use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Lifecycle of a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Created, waiting for the start command
    Ready,
    /// Ticks are being processed
    Running,
    /// Terminal; no further mutation happens
    GameOver,
}

/// Complete, plain-data game state.
///
/// Owned and mutated exclusively by the engine; everything else sees `Clone`d
/// snapshots taken between ticks, never a half-updated state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Option<Cell>,
    pub grid: Grid,
    pub score: u32,
    pub phase: GamePhase,
}

impl GameState {
    /// Fresh state: snake of the configured length at the origin heading
    /// right, score zero, waiting to start.
    pub fn new(grid: Grid, initial_snake_length: usize) -> Self {
        Self {
            snake: Snake::new(Cell::new(0, 0), Direction::Right, initial_snake_length),
            food: None,
            grid,
            score: 0,
            phase: GamePhase::Ready,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Grid::new(50), 1);

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head().unwrap(), Cell::new(0, 0));
        assert_eq!(state.snake.direction(), Direction::Right);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Ready);
        assert!(state.food.is_none());
    }

    #[test]
    fn test_phase_queries() {
        let mut state = GameState::new(Grid::new(10), 1);
        assert!(!state.is_running());
        assert!(!state.is_over());

        state.phase = GamePhase::Running;
        assert!(state.is_running());

        state.phase = GamePhase::GameOver;
        assert!(state.is_over());
        assert!(!state.is_running());
    }
}
