pub mod batch;
pub mod config;
pub mod error;
pub mod export;
pub mod form;
pub mod grade;
pub mod storage;

pub use batch::{Score, ScoreBatch, Subject, parse_count, split_tokens};
pub use config::{BestScope, FormConfig, Mode};
pub use error::{Error, ErrorKind, PersistenceWarning, Result};
pub use form::{
    FormController, FormEvent, FormState, GradeRecord, Presenter, PresenterEvent,
    RecordingPresenter, ScoreSlot, Submission,
};
pub use grade::{Letter, grade};
pub use storage::{GradeLog, RecordSink, format_log_line};
