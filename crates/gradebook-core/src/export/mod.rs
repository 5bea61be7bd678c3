//! Result formatting.
//!
//! - `text` - plain multi-line result text handed to presenters
//! - `console` - colored rendering for terminals

pub mod console;
pub mod text;

pub use console::*;
pub use text::*;
