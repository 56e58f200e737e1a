//! Player-facing text for engine results.

use serde::{Deserialize, Serialize};

use super::engine::{GuessResult, HintResult};
use super::rules::{Tier, MAX_SECRET};

/// Attempt count at which a struggling player gets a nudge.
pub const ENCOURAGE_AT_ATTEMPT: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageKind {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    fn new(text: impl Into<String>, kind: MessageKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}

/// Message for a guess, or `None` when the guess was ignored.
pub fn for_guess(result: &GuessResult) -> Option<Message> {
    let msg = match result {
        GuessResult::Correct { secret, .. } => Message::new(
            format!("🎉 Congratulations! You found the number {}!", secret),
            MessageKind::Success,
        ),
        GuessResult::TooLow { tier } => proximity(*tier, "low"),
        GuessResult::TooHigh { tier } => proximity(*tier, "high"),
        GuessResult::Invalid { .. } => Message::new(
            format!("❗ Please enter a number between 0 and {}!", MAX_SECRET),
            MessageKind::Error,
        ),
        GuessResult::GameAlreadyOver => return None,
    };
    Some(msg)
}

fn proximity(tier: Tier, direction: &str) -> Message {
    match tier {
        Tier::VeryClose => Message::new(
            format!("🔥 Very close! Your guess is too {}!", direction),
            MessageKind::Warning,
        ),
        Tier::Close => Message::new(
            format!("📈 Close! Your guess is too {}!", direction),
            MessageKind::Warning,
        ),
        Tier::Far => Message::new(
            format!("📉 Your guess is too {}!", direction),
            MessageKind::Error,
        ),
    }
}

/// Message for a hint, or `None` when no hint was given.
pub fn for_hint(result: &HintResult) -> Option<Message> {
    result
        .text()
        .map(|text| Message::new(format!("💡 Hint: {}", text), MessageKind::Warning))
}

pub fn encouragement() -> Message {
    Message::new("💪 Don't give up! You're getting closer!", MessageKind::Warning)
}
