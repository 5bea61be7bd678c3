//! Parsing of interactive form commands.

use anyhow::{Result, bail};

/// One line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    Name(String),
    Count(String),
    Score { index: usize, text: String },
    Scores(String),
    Submit,
    Reset,
    Slots,
    Records,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  name <text>          set the student name
  count <n>            set the number of scores and create score fields
  score <i> <value>    fill score field i
  scores <v1 v2 ...>   fill every score field in order
                       (class mode without fields: raw scores for all students)
  submit               grade the entered scores
  reset                clear the form and every record
  slots                show the score fields
  records              show every record graded this session
  help                 show this help
  quit                 leave";

impl FormCommand {
    /// Parse a line. Blank lines yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "name" => Self::Name(rest.to_string()),
            "count" => Self::Count(rest.to_string()),
            "score" => {
                let Some((index, text)) = rest.split_once(char::is_whitespace) else {
                    bail!("usage: score <i> <value>");
                };
                let Ok(index) = index.parse::<usize>() else {
                    bail!("score field number must be a positive integer: {:?}", index);
                };
                Self::Score {
                    index,
                    text: text.trim().to_string(),
                }
            }
            "scores" => Self::Scores(rest.to_string()),
            "submit" => Self::Submit,
            "reset" => Self::Reset,
            "slots" => Self::Slots,
            "records" => Self::Records,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command {:?} (type 'help')", other),
        };
        Ok(Some(command))
    }
}
