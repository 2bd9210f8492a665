use super::collision::{check_fatal, hits_food, CollisionType};
use super::config::GameConfig;
use super::direction::{Direction, DirectionController};
use super::error::GameError;
use super::food::FoodSpawner;
use super::grid::Grid;
use super::state::{GamePhase, GameState};

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickResult {
    /// The snake ate the food this tick
    pub ate_food: bool,
    /// The fatal collision that ended the game, if any
    pub collision: Option<CollisionType>,
    /// Set exactly when this call entered the terminal phase, carrying the
    /// final score
    pub final_score: Option<u32>,
}

/// The tick-driven orchestrator.
///
/// Owns the game state outright. The timer and the input source only reach it
/// through `tick`, `request_direction`, `start` and `stop`; renderers read
/// `snapshot` copies. Direction requests are buffered and applied at the
/// start of the next tick, never mid-tick, so at most one change of heading
/// takes effect per step.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    controller: DirectionController,
    spawner: FoodSpawner,
}

impl GameEngine {
    /// Build a fresh engine in the `Ready` phase with food already placed.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let grid = Grid::new(config.grid_size);
        let mut spawner = FoodSpawner::new();
        let mut state = GameState::new(grid, config.initial_snake_length);
        state.food = Some(spawner.spawn(&state.snake, &grid)?);

        Ok(Self {
            config,
            state,
            controller: DirectionController::new(),
            spawner,
        })
    }

    /// Begin ticking. No effect unless the game is waiting in `Ready`.
    pub fn start(&mut self) {
        if self.state.phase == GamePhase::Ready {
            self.state.phase = GamePhase::Running;
        }
    }

    /// Forced termination, e.g. the player quitting mid-game. Terminal.
    pub fn stop(&mut self) {
        self.state.phase = GamePhase::GameOver;
    }

    /// Buffer a direction change for the next tick. Reversal requests are
    /// dropped at tick time; a request is never an error.
    pub fn request_direction(&mut self, direction: Direction) {
        self.controller.request(direction);
    }

    /// A consistent copy of the current state for rendering.
    pub fn snapshot(&self) -> GameState {
        self.state.clone()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Throw away the current game and return to `Ready` with fresh food.
    pub fn reset(&mut self) -> Result<(), GameError> {
        let grid = self.state.grid;
        let mut state = GameState::new(grid, self.config.initial_snake_length);
        state.food = Some(self.spawner.spawn(&state.snake, &grid)?);

        self.state = state;
        self.controller = DirectionController::new();
        Ok(())
    }

    /// Advance the simulation one step.
    ///
    /// A no-op unless the game is running: ticks before `start` and after
    /// game over change nothing and report nothing. The tick order is fixed:
    /// resolve the buffered direction, test the candidate head cell for
    /// fatal collisions before committing anything, then move, then handle
    /// food.
    pub fn tick(&mut self) -> Result<TickResult, GameError> {
        if !self.state.is_running() {
            return Ok(TickResult::default());
        }

        let heading = self.controller.resolve(self.state.snake.direction());
        self.state.snake.set_direction(heading);

        let candidate = self.state.snake.head()?.step(heading);

        if let Some(collision) = check_fatal(candidate, &self.state.grid, &self.state.snake) {
            self.state.phase = GamePhase::GameOver;
            return Ok(TickResult {
                ate_food: false,
                collision: Some(collision),
                final_score: Some(self.state.score),
            });
        }

        let grow = hits_food(candidate, self.state.food);
        self.state.snake.advance(candidate, grow);

        if !grow {
            return Ok(TickResult::default());
        }

        self.state.score += 1;
        self.state.food = None;

        match self.spawner.spawn(&self.state.snake, &self.state.grid) {
            Ok(cell) => self.state.food = Some(cell),
            Err(GameError::GridFull) => {
                // The snake covers the whole board: nothing left to eat,
                // the game is won and over.
                self.state.phase = GamePhase::GameOver;
                return Ok(TickResult {
                    ate_food: true,
                    collision: None,
                    final_score: Some(self.state.score),
                });
            }
            Err(other) => return Err(other),
        }

        Ok(TickResult {
            ate_food: true,
            collision: None,
            final_score: None,
        })
    }
}
