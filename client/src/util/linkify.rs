//! Split narrative text into plain and URL segments for link rendering.

#[cfg(test)]
#[path = "linkify_test.rs"]
mod linkify_test;

use std::sync::LazyLock;

use regex::Regex;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("Invalid regex"));

/// A run of text that is either plain or a bare URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Text(&'a str),
    Link(&'a str),
}

/// Split `text` at every `http://`/`https://` URL. Concatenating the
/// segments in order reproduces `text` exactly.
#[must_use]
pub fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut cursor = 0;
    for m in URL_RE.find_iter(text) {
        if m.start() > cursor {
            out.push(Segment::Text(&text[cursor..m.start()]));
        }
        out.push(Segment::Link(m.as_str()));
        cursor = m.end();
    }
    if cursor < text.len() {
        out.push(Segment::Text(&text[cursor..]));
    }
    out
}
