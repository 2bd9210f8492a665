/// Direction the snake can move. No diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Direction::Up, Direction::Down)
                | (Direction::Down, Direction::Up)
                | (Direction::Left, Direction::Right)
                | (Direction::Right, Direction::Left)
        )
    }

    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Buffers direction requests between ticks.
///
/// Input can arrive at any moment; only the latest request is kept, and it
/// takes effect at the start of the next tick, validated against the heading
/// in effect at that point. Two quick key presses inside one tick interval
/// can therefore never compose into a 180-degree reversal.
#[derive(Debug, Default)]
pub struct DirectionController {
    pending: Option<Direction>,
}

impl DirectionController {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Record a request, replacing any earlier one from the same interval.
    pub fn request(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Take the pending request and validate it against `current`.
    ///
    /// A request that exactly reverses `current` is silently dropped, not an
    /// error. The buffer is cleared either way.
    pub fn resolve(&mut self, current: Direction) -> Direction {
        match self.pending.take() {
            Some(requested) if !requested.is_opposite(current) => requested,
            _ => current,
        }
    }
}
