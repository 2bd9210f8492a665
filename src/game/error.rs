use thiserror::Error;

/// Errors surfaced by the core simulation.
///
/// Collisions are not errors; they end the game through a normal phase
/// transition. These variants cover structural problems only.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// The snake body has no cells. Length >= 1 is a structural invariant,
    /// so hitting this signals a defect rather than a recoverable condition.
    #[error("snake body is empty")]
    EmptyBody,

    /// No free cell is left for food placement.
    #[error("no free cell left on the grid")]
    GridFull,
}
