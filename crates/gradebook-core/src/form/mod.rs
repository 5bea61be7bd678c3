//! The grading form.
//!
//! - `FormController` - owns the form input, score slots and session records
//! - `FormState` - Idle / FieldsConfigured / Submitted
//! - `Presenter` - the seam to whatever renders the form
//! - `GradeRecord`, `Submission` - results of a successful submit

mod controller;
mod presenter;
mod record;
mod slot;
mod state;

pub use controller::*;
pub use presenter::*;
pub use record::*;
pub use slot::*;
pub use state::*;
