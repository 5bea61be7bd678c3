//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::form::{GradeRecord, ScoreSlot};
use crate::grade::Letter;
use crate::storage::format_score_list;

/// Format a record for console display with colored output
///
/// Returns a multi-line string with a boxed format.
pub fn format_record_console(record: &GradeRecord) -> String {
    let mut output = String::new();

    let title = format!("  {}", record.subject.to_string().bold());
    let border_width = (record.subject.to_string().len() + 4).max(32);
    let border: String = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  SCORES : {}", format_score_list(&record.scores));
    if let Some(average) = record.average {
        let _ = writeln!(output, "  AVERAGE: {:.2}", average);
    }
    let _ = writeln!(output, "  GRADE  : {}", format_colored_letter(&record.letter));
    let _ = write!(output, "{}", border_dim);

    output
}

pub fn format_colored_letter(letter: &Letter) -> String {
    let name = letter.short_name();
    match letter {
        Letter::A => name.green().bold().to_string(),
        Letter::B => name.cyan().bold().to_string(),
        Letter::C => name.yellow().to_string(),
        Letter::D => name.magenta().to_string(),
        Letter::F => name.red().bold().to_string(),
    }
}

/// One line per slot: `Score 1: 70`, with `_` for empty slots.
pub fn format_slots_console(slots: &[ScoreSlot]) -> String {
    slots
        .iter()
        .map(|slot| {
            let text = if slot.text.is_empty() {
                "_".dimmed().to_string()
            } else {
                slot.text.clone()
            };
            format!("  {} {}", slot.label(), text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{Score, Subject};

    #[test]
    fn test_console_record_contains_fields() {
        let scores = vec![Score::new(70).unwrap(), Score::new(85).unwrap()];
        let record = GradeRecord::new(
            Subject::Named("Ada".into()),
            scores,
            Some(77.5),
            Letter::A,
        );
        let output = format_record_console(&record);

        assert!(output.contains("Ada"));
        assert!(output.contains("[70, 85]"));
        assert!(output.contains("77.50"));
        assert!(output.contains('A'));
    }

    #[test]
    fn test_format_slots_console() {
        let mut first = ScoreSlot::new(1);
        first.text = "70".into();
        let output = format_slots_console(&[first, ScoreSlot::new(2)]);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "  Score 1: 70");
        assert!(lines[1].starts_with("  Score 2: "));
    }
}
