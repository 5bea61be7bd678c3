use crate::error::{Error, ErrorKind, PersistenceWarning};

use super::ScoreSlot;

/// Rendering side of the form.
///
/// The controller calls these after every operation; implementors decide
/// how slots, results and errors appear.
pub trait Presenter {
    /// Show entry positions for freshly configured slots.
    fn materialize_slots(&mut self, slots: &[ScoreSlot]);

    /// Remove every visible slot.
    fn clear_slots(&mut self);

    fn show_result(&mut self, text: &str);

    fn show_error(&mut self, error: &Error);

    fn show_warning(&mut self, warning: &PersistenceWarning);
}

#[derive(Debug, Clone, PartialEq)]
pub enum PresenterEvent {
    Materialized(Vec<ScoreSlot>),
    Cleared,
    Result(String),
    Error { kind: ErrorKind, message: String },
    Warning(PersistenceWarning),
}

/// Presenter that keeps every call, for tests and headless embedding.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub events: Vec<PresenterEvent>,
    visible_slots: usize,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of slots currently on screen.
    pub fn visible_slots(&self) -> usize {
        self.visible_slots
    }

    pub fn last_result(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            PresenterEvent::Result(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn errors(&self) -> Vec<ErrorKind> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Error { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect()
    }

    pub fn warnings(&self) -> Vec<&PersistenceWarning> {
        self.events
            .iter()
            .filter_map(|event| match event {
                PresenterEvent::Warning(warning) => Some(warning),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn materialize_slots(&mut self, slots: &[ScoreSlot]) {
        self.visible_slots += slots.len();
        self.events.push(PresenterEvent::Materialized(slots.to_vec()));
    }

    fn clear_slots(&mut self) {
        self.visible_slots = 0;
        self.events.push(PresenterEvent::Cleared);
    }

    fn show_result(&mut self, text: &str) {
        self.events.push(PresenterEvent::Result(text.to_string()));
    }

    fn show_error(&mut self, error: &Error) {
        self.events.push(PresenterEvent::Error {
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    fn show_warning(&mut self, warning: &PersistenceWarning) {
        self.events.push(PresenterEvent::Warning(warning.clone()));
    }
}
