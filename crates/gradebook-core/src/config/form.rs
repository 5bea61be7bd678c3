use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::{EnumString, IntoStaticStr};

use super::defaults;
use crate::error::{Error, Result};

/// How the form collects scores.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mode {
    /// One named student, several scores, graded on the average.
    #[default]
    Student,
    /// Positional students with one score each.
    Class,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Best-score scope used when the config does not name one.
    pub fn default_scope(&self) -> BestScope {
        match self {
            Self::Student => BestScope::Subject,
            Self::Class => BestScope::Batch,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which scores the best score is taken over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum BestScope {
    /// The subject's own scores.
    Subject,
    /// Every score in the current submission.
    Batch,
    /// The current submission plus everything recorded since the last reset.
    Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub mode: Mode,
    pub max_scores: usize,
    pub best_scope: Option<BestScope>,
    pub log_path: Option<PathBuf>,
}

impl Default for FormConfig {
    /// Student mode without a log. Fields missing from a config file take
    /// these values.
    fn default() -> Self {
        Self {
            mode: Mode::Student,
            max_scores: defaults::MAX_SCORES,
            best_scope: None,
            log_path: None,
        }
    }
}

impl FormConfig {
    /// Scrollable student form: up to 10 scores, appends to the log file.
    pub fn student() -> Self {
        Self {
            log_path: Some(PathBuf::from(defaults::LOG_FILE)),
            ..Self::default()
        }
    }

    /// Fixed-layout student form: up to 4 scores, no log.
    pub fn fixed_student() -> Self {
        Self {
            max_scores: defaults::FIXED_MAX_SCORES,
            ..Self::default()
        }
    }

    /// Class form: one score per positional student, graded against the class best.
    pub fn class() -> Self {
        Self {
            mode: Mode::Class,
            ..Self::default()
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::ConfigParseError(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_scores == 0 {
            return Err(Error::ConfigParseError(
                "max_scores must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn scope(&self) -> BestScope {
        self.best_scope.unwrap_or_else(|| self.mode.default_scope())
    }
}
