//! Persistence of graded records.

mod log;

pub use log::*;
