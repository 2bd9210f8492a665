//! Grid snake: a tick-driven snake simulation with a terminal front-end.
//!
//! The `game` module holds the complete simulation (grid, snake, collisions,
//! food, the tick state machine) and has no I/O dependencies; `modes`,
//! `render` and `input` wire it to a tokio timer, a ratatui screen and
//! crossterm key events. `metrics` tracks per-session stats.

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
