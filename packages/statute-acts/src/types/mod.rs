//! Domain data types: chapters, act references, and summaries.

pub mod chapter;
pub mod reference;
pub mod summary;
