//! Form configuration.
//!
//! - `FormConfig` - mode, score-count bound, best-score scope and log path
//! - `Mode`, `BestScope` - per-variant policies
//! - Preset defaults for the three form variants

mod form;

pub use form::*;

/// Default values shared by the presets.
pub mod defaults {
    /// Upper bound on the declared number of scores.
    pub const MAX_SCORES: usize = 10;

    /// Upper bound used by the fixed-layout form.
    pub const FIXED_MAX_SCORES: usize = 4;

    /// Log file the scrollable student form appends to.
    pub const LOG_FILE: &str = "student_data.txt";

    /// Result text shown before anything has been submitted.
    pub const RESULT_PLACEHOLDER: &str = "Grades will be displayed here.";
}
