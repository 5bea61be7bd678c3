//! Score validation and batches.
//!
//! - `Score` - a validated score in [0, 100]
//! - `ScoreBatch` - the non-empty scores of one subject or one class
//! - `Subject` - who a batch belongs to

mod score;
mod score_batch;

pub use score::*;
pub use score_batch::*;
