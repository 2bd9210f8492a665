use std::collections::VecDeque;

use super::direction::Direction;
use super::error::GameError;
use super::grid::Cell;

/// The snake: an ordered sequence of occupied cells plus its heading.
///
/// The front of the queue is the head, the back is the tail. The body is
/// never empty, and no two cells coincide once an operation has committed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
}

impl Snake {
    /// Create a snake of `length` cells (at least one) with its head at
    /// `head`, trailing away opposite to `direction`.
    pub fn new(head: Cell, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| Cell::new(head.x - dx * i, head.y - dy * i))
            .collect();

        Self { body, direction }
    }

    /// The front cell.
    pub fn head(&self) -> Result<Cell, GameError> {
        self.body.front().copied().ok_or(GameError::EmptyBody)
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Commit one move: `new_head` becomes the front cell. Unless `grow`,
    /// the tail cell is dropped, so a plain move is a translation and a
    /// growing move extends the length by one.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.push_front(new_head);
        if !grow {
            self.body.pop_back();
        }
    }

    /// Whether `cell` is part of the body, head included.
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Cells in order, head first.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.body.iter().copied()
    }
}
