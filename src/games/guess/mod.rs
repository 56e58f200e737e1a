pub mod engine;
pub mod feedback;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rules;
pub mod script;
pub mod secret;

pub use engine::{GameEngine, GameSession, GuessResult, HintResult, Snapshot};
pub use game::{GuessScreen, ScreenEvent};
pub use secret::{FixedSecrets, RandomSecrets, SecretSource};

use crate::core::engine::Engine;
use anyhow::Result;
use ratatui::DefaultTerminal;

/// Run the interactive game until the player quits
pub async fn run_game<S: SecretSource>(source: S, terminal: DefaultTerminal) -> Result<Snapshot> {
    let screen = GuessScreen::new(GameEngine::new(source));
    let screen = Engine::new(screen).run(terminal).await?;
    Ok(screen.engine().snapshot())
}
