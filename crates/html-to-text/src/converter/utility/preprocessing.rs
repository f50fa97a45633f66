//! Input normalization applied before parsing.

use std::borrow::Cow;

const NBSP_ENTITY: &str = "&nbsp;";
const NBSP_CHAR: char = '\u{a0}';

/// Normalize line endings and non-breaking spaces in raw HTML.
///
/// `\r\n` and lone `\r` become `\n`; `&nbsp;` and U+00A0 become a plain space.
/// Borrows the input when there is nothing to replace.
pub(crate) fn preprocess_html(html: &str) -> Cow<'_, str> {
    if !html.contains(['\r', NBSP_CHAR]) && !html.contains(NBSP_ENTITY) {
        return Cow::Borrowed(html);
    }

    let mut out = String::with_capacity(html.len());
    let mut chars = html.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                out.push('\n');
            }
            NBSP_CHAR => out.push(' '),
            _ => out.push(ch),
        }
    }

    if out.contains(NBSP_ENTITY) {
        out = out.replace(NBSP_ENTITY, " ");
    }

    Cow::Owned(out)
}
