//! Scoring, proximity and hint rules for the guessing game.
//!
//! Everything here is a pure function of the secret and the session counters,
//! so the engine and any renderer agree on the numbers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Largest value the secret (and a valid guess) can take.
pub const MAX_SECRET: u8 = 100;

/// Score a session starts from before attempts and hints are deducted.
pub const BASE_SCORE: u32 = 100;

/// Points deducted per hint taken.
pub const HINT_PENALTY: u32 = 5;

/// Hints available per session.
pub const MAX_HINTS: u8 = 3;

/// Upper bound (inclusive) of the distance reported as `VeryClose`.
pub const VERY_CLOSE_MAX: u32 = 5;

/// Upper bound (inclusive) of the distance reported as `Close`.
pub const CLOSE_MAX: u32 = 15;

/// How near a wrong guess landed to the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    VeryClose,
    Close,
    Far,
}

impl Tier {
    /// Classify a non-zero distance between a guess and the secret.
    pub fn from_distance(difference: u32) -> Self {
        if difference <= VERY_CLOSE_MAX {
            Tier::VeryClose
        } else if difference <= CLOSE_MAX {
            Tier::Close
        } else {
            Tier::Far
        }
    }
}

/// Score shown while the game is still running.
pub fn live_score(attempts: u32, hints_used: u8) -> u32 {
    BASE_SCORE
        .saturating_sub(attempts)
        .saturating_sub(HINT_PENALTY * u32::from(hints_used))
}

/// Score awarded on a correct guess. A first-attempt win is always worth the
/// full score, hints or not.
pub fn final_score(attempts: u32, hints_used: u8) -> u32 {
    if attempts == 1 {
        BASE_SCORE
    } else {
        live_score(attempts, hints_used)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Even,
    Odd,
}

/// One of the four fixed ranges the second hint narrows the secret to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    #[serde(rename = "up_to_25")]
    UpTo25,
    #[serde(rename = "from_26_to_50")]
    From26To50,
    #[serde(rename = "from_51_to_75")]
    From51To75,
    #[serde(rename = "from_76")]
    From76,
}

impl Band {
    pub fn of(secret: u8) -> Self {
        if secret <= 25 {
            Band::UpTo25
        } else if secret <= 50 {
            Band::From26To50
        } else if secret <= 75 {
            Band::From51To75
        } else {
            Band::From76
        }
    }
}

/// What a hint reveals about the secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Clue {
    Parity(Parity),
    Band(Band),
    SingleDigit,
    /// `secret / 10`, so 100 reports 10.
    LeadingDigit(u8),
}

impl Clue {
    /// Clue delivered for hint `level` (1-based). Levels past the last hint
    /// have no clue.
    pub fn for_level(level: u8, secret: u8) -> Option<Self> {
        match level {
            1 => Some(Clue::Parity(if secret % 2 == 0 {
                Parity::Even
            } else {
                Parity::Odd
            })),
            2 => Some(Clue::Band(Band::of(secret))),
            3 => Some(if secret < 10 {
                Clue::SingleDigit
            } else {
                Clue::LeadingDigit(secret / 10)
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clue::Parity(Parity::Even) => write!(f, "The number is even!"),
            Clue::Parity(Parity::Odd) => write!(f, "The number is odd!"),
            Clue::Band(Band::UpTo25) => write!(f, "The number is 25 or less!"),
            Clue::Band(Band::From26To50) => write!(f, "The number is between 26-50!"),
            Clue::Band(Band::From51To75) => write!(f, "The number is between 51-75!"),
            Clue::Band(Band::From76) => write!(f, "The number is 76 or higher!"),
            Clue::SingleDigit => write!(f, "It's a single digit number!"),
            Clue::LeadingDigit(d) => write!(f, "The first digit is {}!", d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_thresholds() {
        assert_eq!(Tier::from_distance(1), Tier::VeryClose);
        assert_eq!(Tier::from_distance(5), Tier::VeryClose);
        assert_eq!(Tier::from_distance(6), Tier::Close);
        assert_eq!(Tier::from_distance(15), Tier::Close);
        assert_eq!(Tier::from_distance(16), Tier::Far);
        assert_eq!(Tier::from_distance(100), Tier::Far);
    }

    #[test]
    fn live_score_floors_at_zero() {
        assert_eq!(live_score(0, 0), 100);
        assert_eq!(live_score(4, 2), 86);
        assert_eq!(live_score(90, 3), 0);
        assert_eq!(live_score(u32::MAX, 3), 0);
    }

    #[test]
    fn first_attempt_win_ignores_hints() {
        assert_eq!(final_score(1, 3), 100);
        assert_eq!(live_score(1, 3), 84);
        assert_eq!(final_score(2, 3), 83);
    }

    #[test]
    fn band_edges() {
        assert_eq!(Band::of(0), Band::UpTo25);
        assert_eq!(Band::of(25), Band::UpTo25);
        assert_eq!(Band::of(26), Band::From26To50);
        assert_eq!(Band::of(50), Band::From26To50);
        assert_eq!(Band::of(51), Band::From51To75);
        assert_eq!(Band::of(75), Band::From51To75);
        assert_eq!(Band::of(76), Band::From76);
        assert_eq!(Band::of(100), Band::From76);
    }

    #[test]
    fn clue_per_level() {
        assert_eq!(Clue::for_level(1, 42), Some(Clue::Parity(Parity::Even)));
        assert_eq!(Clue::for_level(2, 42), Some(Clue::Band(Band::From26To50)));
        assert_eq!(Clue::for_level(3, 42), Some(Clue::LeadingDigit(4)));
        assert_eq!(Clue::for_level(3, 9), Some(Clue::SingleDigit));
        assert_eq!(Clue::for_level(3, 100), Some(Clue::LeadingDigit(10)));
        assert_eq!(Clue::for_level(0, 42), None);
        assert_eq!(Clue::for_level(4, 42), None);
    }

    #[test]
    fn clue_text() {
        assert_eq!(Clue::Parity(Parity::Odd).to_string(), "The number is odd!");
        assert_eq!(Clue::Band(Band::From51To75).to_string(), "The number is between 51-75!");
        assert_eq!(Clue::LeadingDigit(7).to_string(), "The first digit is 7!");
    }
}
