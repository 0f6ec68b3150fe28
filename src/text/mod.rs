//! Text editing core
//!
//! Pure text handling with no DOM knowledge.
//!
//! ## Modules
//!
//! - `transducer`: the doubled-vowel rewrite for a single edit
//! - `buffer`: per-buffer snapshot state, fed one input event at a time

pub mod buffer;
pub mod transducer;

// Re-exports for convenience
pub use buffer::{BufferState, EditResult};
pub use transducer::{divergence_index, transduce, Transduction};
