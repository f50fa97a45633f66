//! Convert HTML documents to readable plain text.
//!
//! The converter walks an html5ever document tree in document order and emits
//! whitespace and punctuation cues in place of markup:
//!
//! - headings, paragraphs, `div`s, lists and table rows start on a new line
//! - list items are prefixed with `- `
//! - table cells are separated by tabs
//! - images become `[image]`
//! - `script`, `style`, `head`, `title` and `meta` subtrees are dropped
//!
//! The raw result is then cleaned up so that lines carry no edge whitespace and
//! at most one blank line separates blocks.
//!
//! ```
//! let text = html_to_text::convert("<h1>Title</h1><p>Body text</p>")?;
//! assert_eq!(text, "Title\n\nBody text");
//! # Ok::<(), html_to_text::ConversionError>(())
//! ```

pub mod error;
mod converter;
pub(crate) mod text;

pub use converter::convert;
pub use converter::rules::{HORIZONTAL_RULE, IMAGE_PLACEHOLDER};
pub use error::{ConversionError, Result};
