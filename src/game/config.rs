use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Startup configuration for a game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of cells along each side of the square grid
    pub grid_size: usize,
    /// Wall-clock time between simulation ticks, in milliseconds
    pub tick_interval_ms: u64,
    /// Length of the snake when a game begins
    pub initial_snake_length: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            tick_interval_ms: 100,
            initial_snake_length: 1,
        }
    }
}

impl GameConfig {
    /// Create a configuration with custom grid size and tick cadence
    pub fn new(grid_size: usize, tick_interval_ms: u64) -> Self {
        Self {
            grid_size,
            tick_interval_ms,
            ..Default::default()
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Small grid for tests
    pub fn small() -> Self {
        Self {
            grid_size: 10,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid_size, 50);
        assert_eq!(config.tick_interval_ms, 100);
        assert_eq!(config.initial_snake_length, 1);
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(15, 50);
        assert_eq!(config.grid_size, 15);
        assert_eq!(config.tick_interval(), Duration::from_millis(50));
    }
}
