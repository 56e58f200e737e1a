//! Headless driver: one command per input line, one JSON object per reply.

use std::io::{BufRead, Write};

use anyhow::{Context as _, Result};
use serde::Serialize;
use tracing::{debug, info};

use super::engine::{GameEngine, GuessResult, HintResult, Snapshot};
use super::feedback;
use super::secret::SecretSource;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Hint,
    Restart,
    Status,
    Quit,
}

/// Parse one input line. Blank lines yield `None`; anything that is not a
/// keyword is taken as guess text.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (trimmed, ""),
    };
    let cmd = match word.to_ascii_lowercase().as_str() {
        "hint" => Command::Hint,
        "restart" => Command::Restart,
        "status" => Command::Status,
        "quit" | "exit" => Command::Quit,
        "guess" => Command::Guess(rest.to_string()),
        _ => Command::Guess(trimmed.to_string()),
    };
    Some(cmd)
}

#[derive(Debug, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Reply {
    Guess {
        input: String,
        result: GuessResult,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Hint {
        result: HintResult,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Restart,
    Status,
}

#[derive(Serialize)]
struct Record {
    #[serde(flatten)]
    reply: Reply,
    snapshot: Snapshot,
}

/// Apply a command to the engine. `Quit` has no reply.
pub fn execute<S: SecretSource>(engine: &mut GameEngine<S>, cmd: Command) -> Option<Reply> {
    let reply = match cmd {
        Command::Guess(input) => {
            let result = engine.submit_guess(&input);
            Reply::Guess {
                message: feedback::for_guess(&result).map(|m| m.text),
                input,
                result,
            }
        }
        Command::Hint => {
            let result = engine.request_hint();
            Reply::Hint {
                message: feedback::for_hint(&result).map(|m| m.text),
                result,
            }
        }
        Command::Restart => {
            engine.restart();
            Reply::Restart
        }
        Command::Status => Reply::Status,
        Command::Quit => return None,
    };
    Some(reply)
}

/// Run commands from `input` until it ends or a quit command arrives.
pub fn run_script<S, R, W>(engine: &mut GameEngine<S>, input: R, mut output: W) -> Result<()>
where
    S: SecretSource,
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line.context("failed to read command")?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        debug!(?cmd, "script command");

        let Some(reply) = execute(engine, cmd) else {
            info!("quit requested");
            break;
        };
        let record = Record {
            reply,
            snapshot: engine.snapshot(),
        };
        serde_json::to_writer(&mut output, &record).context("failed to encode reply")?;
        writeln!(output).context("failed to write reply")?;
        output.flush().context("failed to flush output")?;
    }
    Ok(())
}
