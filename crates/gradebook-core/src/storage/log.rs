use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::form::GradeRecord;

/// Destination for graded records. Appends only, never rewrites.
pub trait RecordSink {
    fn append(&mut self, record: &GradeRecord) -> Result<()>;

    /// Where the records go, for warnings.
    fn location(&self) -> PathBuf;
}

/// Plain-text log, one line per record.
#[derive(Debug, Clone)]
pub struct GradeLog {
    path: PathBuf,
}

impl GradeLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecordSink for GradeLog {
    fn append(&mut self, record: &GradeRecord) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(format_log_line(record).as_bytes())?;
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}

/// `Name: <name>, Scores: [a, b], Final Grade: <letter>` plus a newline.
pub fn format_log_line(record: &GradeRecord) -> String {
    format!(
        "Name: {}, Scores: {}, Final Grade: {}\n",
        record.subject,
        format_score_list(&record.scores),
        record.letter
    )
}

/// Bracketed, comma-space separated list: `[70, 85, 95]`.
pub fn format_score_list<T: std::fmt::Display>(scores: &[T]) -> String {
    let items: Vec<String> = scores.iter().map(|s| s.to_string()).collect();
    format!("[{}]", items.join(", "))
}
