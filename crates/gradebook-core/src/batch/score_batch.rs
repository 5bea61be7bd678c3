use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::Score;

/// Who a batch of scores belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Named(String),
    /// 1-based position in a class submission.
    Index(usize),
}

impl Subject {
    /// Build a named subject, rejecting names that are blank after trimming.
    pub fn named(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(Error::Identity);
        }
        Ok(Self::Named(trimmed.to_string()))
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Named(name) => write!(f, "{}", name),
            Self::Index(index) => write!(f, "Student {}", index),
        }
    }
}

/// A validated, non-empty sequence of scores.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBatch {
    scores: Vec<Score>,
}

impl ScoreBatch {
    pub fn new(scores: Vec<Score>) -> Result<Self> {
        if scores.is_empty() {
            return Err(Error::Cardinality {
                expected: 1,
                actual: 0,
            });
        }
        Ok(Self { scores })
    }

    /// Validate raw tokens against the declared count.
    ///
    /// Cardinality is checked first, then each token in order, so the
    /// first bad token is the one reported.
    pub fn parse<S: AsRef<str>>(tokens: &[S], expected: usize) -> Result<Self> {
        if tokens.len() != expected {
            return Err(Error::Cardinality {
                expected,
                actual: tokens.len(),
            });
        }

        let scores = tokens
            .iter()
            .map(|token| Score::parse(token.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        Self::new(scores)
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn best(&self) -> Score {
        // Non-empty by construction
        self.scores.iter().copied().max().unwrap_or_default()
    }

    pub fn average(&self) -> f64 {
        let total: u32 = self.scores.iter().map(|s| u32::from(s.value())).sum();
        f64::from(total) / self.scores.len() as f64
    }
}
