//! Footnote number lookup for markers.
//!
//! The source markup sometimes splits a sentence at the marker boundary, e.g.
//! `<sen>or not the [minister].</sen><sen><sup ...> 2) </sup> ...</sen>`, so
//! the annotation belonging to a marker can sit at the start of the next
//! element.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;
use serde::Serialize;

use crate::config::{FOOTNOTE_SUP_CLOSE, FOOTNOTE_SUP_OPEN};
use crate::error::{AnnotatorError, Result};
use crate::xml::{get_tag_name, next_element_sibling, node_text};

/// Characters of context shown in lookup errors.
const EXCERPT_CHARS: usize = 40;

/// Footnote annotation with the number captured.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FOOTNOTE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{}\s*(\d{{1,9}})\)\s*{}",
        regex::escape(FOOTNOTE_SUP_OPEN),
        regex::escape(FOOTNOTE_SUP_CLOSE)
    ))
    .expect("valid regex")
});

/// Number of the footnote an amendment marker cites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FootnoteNumber(u32);

impl FootnoteNumber {
    /// Wrap a footnote number.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self(number)
    }

    /// The numeric value.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for FootnoteNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Find the footnote number following `cursor` in `node`'s text.
///
/// If the node's text holds no annotation from `cursor` onward, the first
/// annotation in the next sibling element's text is used instead. The cursor
/// is not applied to the sibling.
///
/// # Errors
/// * `AnnotatorError::InvalidCursor` if `cursor` is past the end of the text
///   or not on a character boundary
/// * `AnnotatorError::FootnoteNotFound` if neither node holds an annotation
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use lagasafn_annotator::footnote::next_footnote;
///
/// let xml = r#"<subart nr="1"><sen>Dómendur fara með [dómsvaldið.]</sen><sen>&lt;sup style="font-size:60%"&gt; 7) &lt;/sup&gt; Næsta.</sen></subart>"#;
/// let doc = Document::parse(xml).unwrap();
/// let sen = doc.root_element().first_element_child().unwrap();
/// assert_eq!(next_footnote(sen, 0).unwrap().to_string(), "7");
/// ```
pub fn next_footnote(node: Node<'_, '_>, cursor: usize) -> Result<FootnoteNumber> {
    let text = node_text(node);

    if cursor > text.len() || !text.is_char_boundary(cursor) {
        return Err(AnnotatorError::InvalidCursor {
            tag: get_tag_name(node).to_string(),
            cursor,
            len: text.len(),
        });
    }

    if let Some(number) = find_footnote(text, cursor) {
        return Ok(number);
    }

    if let Some(next) = next_element_sibling(node) {
        if let Some(number) = find_footnote(node_text(next), 0) {
            tracing::debug!(
                tag = %get_tag_name(node),
                cursor,
                footnote = %number,
                "Footnote found in next sibling"
            );
            return Ok(number);
        }
    }

    Err(AnnotatorError::FootnoteNotFound {
        tag: get_tag_name(node).to_string(),
        cursor,
        excerpt: text[cursor..].chars().take(EXCERPT_CHARS).collect(),
    })
}

/// First footnote annotation in `text` at or after `start`.
fn find_footnote(text: &str, start: usize) -> Option<FootnoteNumber> {
    FOOTNOTE_NUMBER
        .captures_at(text, start)
        .and_then(|caps| caps.get(1))
        .and_then(|digits| digits.as_str().parse().ok())
        .map(FootnoteNumber)
}
