use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GamePhase};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Interactive front-end: wires the engine to a tick timer, the keyboard and
/// the terminal renderer.
///
/// All three run inside one `select!` loop, so ticks are serialized with
/// input handling and rendering by construction; direction requests land in
/// the engine's buffer between ticks and the renderer only ever sees
/// post-tick snapshots.
pub struct HumanMode {
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        let engine = GameEngine::new(config).context("Failed to set up the game")?;

        Ok(Self {
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.engine.config().tick_interval());

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick; terminal phases tick nothing
                _ = tick_timer.tick() => {
                    if self.engine.phase() == GamePhase::Running {
                        self.advance_game()?;
                    }
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    let snapshot = self.engine.snapshot();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &snapshot, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.engine.stop();
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::Steer(direction) => {
                    self.engine.request_direction(direction);
                }
                KeyAction::Start => {
                    if self.engine.phase() == GamePhase::Ready {
                        self.engine.start();
                        self.metrics.on_game_start();
                    }
                }
                KeyAction::Restart => {
                    if self.engine.phase() == GamePhase::GameOver {
                        self.engine.reset().context("Failed to restart the game")?;
                    }
                }
                KeyAction::Quit => {
                    self.engine.stop();
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }

        Ok(())
    }

    fn advance_game(&mut self) -> Result<()> {
        let result = self.engine.tick().context("Game tick failed")?;

        // The terminal event: the tick that ends the game reports the final
        // score exactly once.
        if let Some(final_score) = result.final_score {
            self.metrics.on_game_over(final_score);
        }

        Ok(())
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::small()).unwrap();
        assert_eq!(mode.engine.phase(), GamePhase::Ready);
        assert_eq!(mode.engine.snapshot().score, 0);
    }

    #[test]
    fn test_start_key_begins_game() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();

        mode.handle_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(mode.engine.phase(), GamePhase::Running);

        // A second start press changes nothing.
        mode.handle_event(key(KeyCode::Enter)).unwrap();
        assert_eq!(mode.engine.phase(), GamePhase::Running);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();

        mode.handle_event(key(KeyCode::Enter)).unwrap();
        mode.handle_event(key(KeyCode::Char('r'))).unwrap();
        assert_eq!(mode.engine.phase(), GamePhase::Running);

        mode.engine.stop();
        mode.handle_event(key(KeyCode::Char('r'))).unwrap();
        assert_eq!(mode.engine.phase(), GamePhase::Ready);
        assert_eq!(mode.engine.snapshot().score, 0);
    }

    #[test]
    fn test_quit_key_stops_game() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();
        mode.handle_event(key(KeyCode::Enter)).unwrap();

        mode.handle_event(key(KeyCode::Char('q'))).unwrap();

        assert!(mode.should_quit);
        assert_eq!(mode.engine.phase(), GamePhase::GameOver);
    }

    #[test]
    fn test_terminal_tick_records_metrics() {
        let mut mode = HumanMode::new(GameConfig::small()).unwrap();
        mode.handle_event(key(KeyCode::Enter)).unwrap();

        // From the origin, one tick upward leaves the grid.
        mode.handle_event(key(KeyCode::Up)).unwrap();
        mode.advance_game().unwrap();

        assert_eq!(mode.metrics.games_played, 1);
    }
}
