//! Sentence segmentation for legal prose.
//!
//! Text is cut at every dot, then the pieces are glued back together
//! wherever the dot turns out to belong to an abbreviation, a number, a
//! chained cross-reference ("3. mgr. 4. tölul. 1. gr.") or a table.

mod chunks;
mod engine;
mod protect;

pub use chunks::ChunkCursor;
pub use engine::{separate_sentences, Continuation};
