//! Text processing utilities for plain-text output.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// HTML whitespace: tab, newline, form feed, carriage return, space.
static HTML_WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]+").expect("valid regex"));

static LINE_EDGE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]*\n[ \t]*").expect("valid regex"));

static SPACES_AROUND_TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\t *").expect("valid regex"));

static BLANK_LINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").expect("valid regex"));

/// Collapse every run of HTML whitespace in a text node to a single space.
pub(crate) fn collapse_whitespace_cow(text: &str) -> Cow<'_, str> {
    HTML_WHITESPACE_RUN.replace_all(text, " ")
}

/// Clean up the raw walker output.
///
/// In order: drop spaces/tabs hugging each newline, fold spaces around a tab
/// into the tab, cap newline runs at two, trim the whole result.
pub(crate) fn normalize_output(raw: &str) -> String {
    let text = LINE_EDGE_WHITESPACE.replace_all(raw, "\n");
    let text = SPACES_AROUND_TAB.replace_all(&text, "\t");
    let text = BLANK_LINE_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}
