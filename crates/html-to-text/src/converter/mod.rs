//! HTML to text conversion pipeline.
//!
//! - `main`: entry point, parsing and the explicit-stack tree walker
//! - `context`: read-only arena view over the parsed document
//! - `rules`: per-node prefix/suffix emission rules
//! - `utility`: sibling scanning and input preprocessing

pub(crate) mod context;
mod main;
pub(crate) mod rules;
pub(crate) mod utility;

pub use main::convert;
