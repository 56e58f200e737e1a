use crate::{Context, Game};
use anyhow::{Context as _, Result};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::debug;

/// Idle wake-up so input keeps getting polled between events
const IDLE_POLL: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let (events_tx, mut events_rx) = tokio::sync::mpsc::unbounded_channel::<G::Event>();
        let ctx = Context::new(events_tx);

        loop {
            terminal
                .draw(|f| self.game.render(f))
                .context("failed to draw frame")?;

            // INPUT (Non-blocking)
            if crossterm::event::poll(Duration::from_millis(0))? {
                if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                    if key.kind == crossterm::event::KeyEventKind::Release {
                        continue;
                    }
                    if key.code == crossterm::event::KeyCode::Esc {
                        debug!("quit requested");
                        break;
                    }
                    self.game.handle_input(key, &ctx);
                }
            }

            tokio::select! {
                // Events the game scheduled through ctx
                Some(event) = events_rx.recv() => {
                    self.game.on_event(event, &ctx);
                }

                _ = tokio::time::sleep(IDLE_POLL) => {}
            }
        }

        Ok(self.game)
    }
}
