use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "i64", into = "u8")]
pub struct Score(u8);

impl Score {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 100;

    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(Error::Range { value })
        }
    }

    /// Parse one text token. Surrounding whitespace is ignored.
    pub fn parse(token: &str) -> Result<Self> {
        Self::new(parse_integer(token)?)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Score {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Score> for u8 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_integer(token: &str) -> Result<i64> {
    let trimmed = token.trim();
    trimmed.parse::<i64>().map_err(|_| Error::Parse {
        input: trimmed.to_string(),
    })
}

/// Parse the declared number of scores, bounded to `1..=max`.
pub fn parse_count(text: &str, max: usize) -> Result<usize> {
    let count = parse_integer(text)?;
    match usize::try_from(count) {
        Ok(n) if (1..=max).contains(&n) => Ok(n),
        _ => Err(Error::CountRange { count, max }),
    }
}

/// Split free-form score text on commas and whitespace.
pub fn split_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .collect()
}
