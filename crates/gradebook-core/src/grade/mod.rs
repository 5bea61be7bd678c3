//! Grading scale.
//!
//! - `Letter` - letter grades (F, D, C, B, A)
//! - `grade` - maps a score or average to a letter relative to the best score

mod letter;
mod scale;

pub use letter::*;
pub use scale::*;
