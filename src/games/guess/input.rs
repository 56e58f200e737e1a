//! Turning raw guess text into a number.

use serde::{Deserialize, Serialize};

use super::rules::MAX_SECRET;

/// Why a guess was rejected before reaching the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvalidGuess {
    NotANumber,
    OutOfRange { value: i64 },
}

/// Parse the integer prefix of `raw` and check it is a valid guess.
///
/// Leading whitespace and a single sign are accepted, anything after the
/// digits is ignored: `" 42abc"` is 42, `"3.9"` is 3.
pub fn parse_guess(raw: &str) -> Result<u8, InvalidGuess> {
    let value = leading_integer(raw).ok_or(InvalidGuess::NotANumber)?;
    match u8::try_from(value) {
        Ok(guess) if guess <= MAX_SECRET => Ok(guess),
        _ => Err(InvalidGuess::OutOfRange { value }),
    }
}

fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut seen = false;
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }

    seen.then_some(if negative { -value } else { value })
}

/// Keep an input box inside the valid guess range while the player types.
/// Returns true when the text was changed.
pub fn clamp_input(buffer: &mut String) -> bool {
    match leading_integer(buffer) {
        Some(v) if v > i64::from(MAX_SECRET) => {
            *buffer = MAX_SECRET.to_string();
            true
        }
        Some(v) if v < 0 => {
            *buffer = "0".to_string();
            true
        }
        _ => false,
    }
}
