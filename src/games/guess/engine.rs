use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::input::{parse_guess, InvalidGuess};
use super::rules::{self, Clue, Tier, MAX_HINTS};
use super::secret::SecretSource;

/// Outcome of submitting a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GuessResult {
    Correct { secret: u8, final_score: u32 },
    TooLow { tier: Tier },
    TooHigh { tier: Tier },
    /// The text was not a number in range; nothing changed.
    Invalid { reason: InvalidGuess },
    /// The session is over; nothing changed.
    GameAlreadyOver,
}

/// Outcome of asking for a hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HintResult {
    Hint { level: u8, clue: Clue },
    /// Game over or all hints spent; nothing changed.
    Unavailable,
}

impl HintResult {
    pub fn text(&self) -> Option<String> {
        match self {
            HintResult::Hint { clue, .. } => Some(clue.to_string()),
            HintResult::Unavailable => None,
        }
    }
}

/// Point-in-time view of the session for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub round: u32,
    pub attempts: u32,
    pub hints_used: u8,
    /// Final score once the game is won, live score before that.
    pub score: u32,
    pub is_over: bool,
}

/// State of one game, from drawing the secret until restart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    secret: u8,
    attempts: u32,
    hints_used: u8,
    is_over: bool,
}

impl GameSession {
    fn new(secret: u8) -> Self {
        Self {
            secret,
            attempts: 0,
            hints_used: 0,
            is_over: false,
        }
    }
}

/// Owns the live session and applies the game rules to it.
pub struct GameEngine<S: SecretSource> {
    source: S,
    session: GameSession,
    round: u32,
}

impl<S: SecretSource> GameEngine<S> {
    pub fn new(mut source: S) -> Self {
        let session = GameSession::new(source.draw());
        debug!(secret = session.secret, round = 1, "new round");
        Self {
            source,
            session,
            round: 1,
        }
    }

    /// Submit raw guess text.
    pub fn submit_guess(&mut self, raw: &str) -> GuessResult {
        if self.session.is_over {
            return GuessResult::GameAlreadyOver;
        }

        let guess = match parse_guess(raw) {
            Ok(g) => g,
            Err(reason) => {
                debug!(?reason, "rejected guess");
                return GuessResult::Invalid { reason };
            }
        };

        let s = &mut self.session;
        s.attempts = s.attempts.saturating_add(1);
        debug!(guess, attempts = s.attempts, "guess");

        if guess == s.secret {
            s.is_over = true;
            let final_score = rules::final_score(s.attempts, s.hints_used);
            info!(
                secret = s.secret,
                attempts = s.attempts,
                hints = s.hints_used,
                final_score,
                "round won"
            );
            GuessResult::Correct {
                secret: s.secret,
                final_score,
            }
        } else if guess < s.secret {
            GuessResult::TooLow {
                tier: Tier::from_distance(u32::from(s.secret - guess)),
            }
        } else {
            GuessResult::TooHigh {
                tier: Tier::from_distance(u32::from(guess - s.secret)),
            }
        }
    }

    /// Spend one of the session's hints.
    pub fn request_hint(&mut self) -> HintResult {
        let s = &mut self.session;
        if s.is_over || s.hints_used >= MAX_HINTS {
            return HintResult::Unavailable;
        }

        let level = s.hints_used + 1;
        let Some(clue) = Clue::for_level(level, s.secret) else {
            return HintResult::Unavailable;
        };
        s.hints_used = level;
        debug!(level, "hint");
        HintResult::Hint { level, clue }
    }

    /// Replace the session with a fresh one.
    pub fn restart(&mut self) {
        self.session = GameSession::new(self.source.draw());
        self.round += 1;
        debug!(secret = self.session.secret, round = self.round, "new round");
    }

    pub fn attempts(&self) -> u32 {
        self.session.attempts
    }

    pub fn hints_used(&self) -> u8 {
        self.session.hints_used
    }

    pub fn hints_remaining(&self) -> u8 {
        MAX_HINTS - self.session.hints_used
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over
    }

    /// Live score, recomputed from attempts and hints.
    pub fn current_score(&self) -> u32 {
        rules::live_score(self.session.attempts, self.session.hints_used)
    }

    /// Score awarded for the win, once the game is over.
    pub fn final_score(&self) -> Option<u32> {
        self.session
            .is_over
            .then(|| rules::final_score(self.session.attempts, self.session.hints_used))
    }

    /// Sessions started so far, including the current one.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            round: self.round,
            attempts: self.attempts(),
            hints_used: self.hints_used(),
            score: self.final_score().unwrap_or_else(|| self.current_score()),
            is_over: self.is_over(),
        }
    }

    #[cfg(test)]
    pub(crate) fn secret(&self) -> u8 {
        self.session.secret
    }
}
