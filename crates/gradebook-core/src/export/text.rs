use std::fmt::Write as _;

use crate::config::Mode;
use crate::form::{GradeRecord, Submission};
use crate::storage::format_score_list;

/// Plain result block for one record.
///
/// ```text
/// Student: Ada
/// Scores: [70, 85, 95, 60]
/// Average: 77.50
/// Final Grade: B
/// ```
pub fn format_record(record: &GradeRecord) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Student: {}", record.subject);
    let _ = writeln!(output, "Scores: {}", format_score_list(&record.scores));
    if let Some(average) = record.average {
        let _ = writeln!(output, "Average: {:.2}", average);
    }
    let _ = write!(output, "Final Grade: {}", record.letter);
    output
}

/// Result text for a whole submission.
pub fn format_submission(mode: Mode, submission: &Submission) -> String {
    let blocks: Vec<String> = submission.records.iter().map(format_record).collect();
    match mode {
        Mode::Student => blocks.join("\n\n"),
        Mode::Class => format!("Best score: {}\n\n{}", submission.best, blocks.join("\n\n")),
    }
}
