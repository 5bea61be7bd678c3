use chrono::{DateTime, Local};
use serde::Serialize;

use crate::batch::{Score, Subject};
use crate::error::PersistenceWarning;
use crate::grade::Letter;

/// One graded subject. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    pub subject: Subject,
    pub scores: Vec<Score>,
    /// Only set when the subject has more than one score.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average: Option<f64>,
    #[serde(rename = "final_grade")]
    pub letter: Letter,
    pub submitted_at: DateTime<Local>,
}

impl GradeRecord {
    pub fn new(
        subject: Subject,
        scores: Vec<Score>,
        average: Option<f64>,
        letter: Letter,
    ) -> Self {
        Self {
            subject,
            scores,
            average,
            letter,
            submitted_at: Local::now(),
        }
    }
}

/// Outcome of a successful submit.
#[derive(Debug, Clone)]
pub struct Submission {
    pub records: Vec<GradeRecord>,
    /// Highest score in the comparison set used for this submission.
    pub best: Score,
    /// Set when appending to the log failed. The records are kept regardless.
    pub warning: Option<PersistenceWarning>,
}
