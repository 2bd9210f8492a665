//! Core simulation module
//!
//! Everything that makes the game tick lives here, free of I/O and rendering
//! dependencies, so the simulation can be driven and tested on its own. The
//! engine owns the state; front-ends work from snapshots.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod error;
pub mod food;
pub mod grid;
pub mod snake;
pub mod state;

// Re-export commonly used types
pub use collision::CollisionType;
pub use config::GameConfig;
pub use direction::{Direction, DirectionController};
pub use engine::{GameEngine, TickResult};
pub use error::GameError;
pub use food::FoodSpawner;
pub use grid::{Cell, Grid};
pub use snake::Snake;
pub use state::{GamePhase, GameState};
