use serde::{Deserialize, Serialize};

/// One score-entry position created by configuring the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSlot {
    /// 1-based
    pub index: usize,
    pub text: String,
}

impl ScoreSlot {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            text: String::new(),
        }
    }

    pub fn label(&self) -> String {
        format!("Score {}:", self.index)
    }
}
