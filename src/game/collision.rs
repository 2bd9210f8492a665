use super::grid::{Cell, Grid};
use super::snake::Snake;

/// Type of fatal collision that ends a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the playing field
    Wall,
    /// Snake ran into its own body
    SelfCollision,
}

/// True if `cell` lies outside the playing field.
pub fn hits_wall(cell: Cell, grid: &Grid) -> bool {
    !grid.in_bounds(cell)
}

/// True if `cell` lands on the snake.
///
/// Call this with the prospective head position while the body still holds
/// the pre-move cells; the candidate itself must not be committed yet.
pub fn hits_body(cell: Cell, snake: &Snake) -> bool {
    snake.occupies(cell)
}

/// True if `cell` is where the food currently sits.
pub fn hits_food(cell: Cell, food: Option<Cell>) -> bool {
    food == Some(cell)
}

/// Classify a candidate head position against the fatal collision rules.
/// Food is deliberately not part of this check; it is only consulted once
/// the move is known to be safe.
pub fn check_fatal(cell: Cell, grid: &Grid, snake: &Snake) -> Option<CollisionType> {
    if hits_wall(cell, grid) {
        Some(CollisionType::Wall)
    } else if hits_body(cell, snake) {
        Some(CollisionType::SelfCollision)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;

    #[test]
    fn test_wall_hits() {
        let grid = Grid::new(10);
        assert!(hits_wall(Cell::new(-1, 0), &grid));
        assert!(hits_wall(Cell::new(0, 10), &grid));
        assert!(!hits_wall(Cell::new(0, 0), &grid));
        assert!(!hits_wall(Cell::new(9, 9), &grid));
    }

    #[test]
    fn test_body_hits() {
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);
        assert!(hits_body(Cell::new(4, 5), &snake));
        assert!(hits_body(Cell::new(5, 5), &snake));
        assert!(!hits_body(Cell::new(6, 5), &snake));
    }

    #[test]
    fn test_food_hits() {
        assert!(hits_food(Cell::new(1, 0), Some(Cell::new(1, 0))));
        assert!(!hits_food(Cell::new(1, 0), Some(Cell::new(2, 0))));
        assert!(!hits_food(Cell::new(1, 0), None));
    }

    #[test]
    fn test_fatal_classification() {
        let grid = Grid::new(10);
        let snake = Snake::new(Cell::new(5, 5), Direction::Right, 3);

        assert_eq!(
            check_fatal(Cell::new(10, 5), &grid, &snake),
            Some(CollisionType::Wall)
        );
        assert_eq!(
            check_fatal(Cell::new(4, 5), &grid, &snake),
            Some(CollisionType::SelfCollision)
        );
        assert_eq!(check_fatal(Cell::new(6, 5), &grid, &snake), None);
    }
}
