//! Text preprocessing: normalization, section segmentation, chunking.
//!
//! The three helpers in this module are pure, total functions over their
//! documented input domain: they never perform I/O and never fail.
//!
//! * [`normalize`] — collapses whitespace and newline runs.
//! * [`segment`] — heuristic section detection over loosely structured
//!   prose, producing an ordered title → body map.
//! * [`chunk`] — bounded, overlapping, sentence-respecting splitting for
//!   downstream model consumption.
//!
//! Segmentation and chunking are independent of each other and may run
//! on the same source text for different purposes (structuring versus
//! model feeding).

pub mod chunk;
pub mod normalize;
pub mod segment;

pub use chunk::split_into_chunks;
pub use normalize::normalize_text;
pub use segment::{is_section_header, segment_sections};
