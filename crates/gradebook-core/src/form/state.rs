use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, IntoStaticStr,
)]
pub enum FormState {
    /// No score slots; only name and count are editable.
    #[default]
    Idle,
    FieldsConfigured,
    Submitted,
}

/// User actions that move the form between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    ConfigureFields,
    /// Submit the text entered in the score slots.
    Submit,
    /// Submit free-form score text without slots (class form only).
    SubmitRaw,
    Reset,
}

impl FormState {
    /// Next state after `event`, or `None` if the event is not allowed here.
    ///
    /// ## Transition Rules
    ///
    /// - any -> Idle (reset)
    /// - any -> FieldsConfigured (configure slots, replacing existing ones)
    /// - FieldsConfigured | Submitted -> Submitted (submit slots)
    /// - Idle | Submitted -> Submitted (submit raw text)
    ///
    /// Blocked:
    /// - Idle -> Submitted via slots (there are none yet)
    /// - FieldsConfigured -> Submitted via raw text (slots take precedence)
    pub fn next(self, event: FormEvent) -> Option<FormState> {
        match (self, event) {
            (_, FormEvent::Reset) => Some(FormState::Idle),
            (_, FormEvent::ConfigureFields) => Some(FormState::FieldsConfigured),
            (FormState::FieldsConfigured | FormState::Submitted, FormEvent::Submit) => {
                Some(FormState::Submitted)
            }
            (FormState::Idle | FormState::Submitted, FormEvent::SubmitRaw) => {
                Some(FormState::Submitted)
            }
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for FormState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
