use anyhow::Result;
use guessterm::cli::{Commands, Settings};
use guessterm::games::guess::{self, script, GameEngine, RandomSecrets};
use guessterm::logging::init_logging;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_args();
    init_logging(settings.log_level, settings.log_target())?;

    let source = match settings.seed {
        Some(seed) => RandomSecrets::seeded(seed),
        None => RandomSecrets::from_entropy(),
    };
    info!(mode = ?settings.mode, seed = ?settings.seed, "starting guessterm");

    match settings.mode {
        Commands::Play => {
            let terminal = ratatui::init();
            let result = guess::run_game(source, terminal).await;
            ratatui::restore();

            let snapshot = result?;
            info!(?snapshot, "session ended");
        }
        Commands::Script => {
            let mut engine = GameEngine::new(source);
            let stdin = std::io::stdin();
            script::run_script(&mut engine, stdin.lock(), std::io::stdout().lock())?;
        }
    }

    Ok(())
}
