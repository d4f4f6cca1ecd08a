//! Locating every amendment marker in a law document.
//!
//! Each closing bracket or ellipsis in an element's text is paired with the
//! footnote it cites and the location path of that element, relative to the
//! nearest enclosing boundary element (usually `art`).

use roxmltree::Node;
use serde::Serialize;

use crate::error::{AnnotatorError, Result};
use crate::footnote::{next_footnote, FootnoteNumber};
use crate::location::{build_path, LocationPath};
use crate::xml::{ancestor_elements, get_tag_name, node_text};

/// Kind of marker found in text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// `]` closing an amended passage.
    Closing,
    /// `…` standing in for removed text.
    Omission,
}

impl MarkerKind {
    fn from_char(c: char) -> Option<Self> {
        match c {
            ']' => Some(Self::Closing),
            '…' => Some(Self::Omission),
            _ => None,
        }
    }
}

/// A marker together with its footnote and address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MarkerLocation {
    /// Which marker was found.
    pub kind: MarkerKind,

    /// Footnote the marker cites.
    pub footnote: FootnoteNumber,

    /// Address of the element holding the marker.
    pub path: LocationPath,
}

/// Find every marker under `root` inside an element tagged `boundary_tag`.
///
/// Elements outside any boundary element are skipped. Markers whose
/// footnote cannot be found are logged and skipped; structural problems
/// (an ancestor without `nr`) abort the scan.
///
/// # Errors
/// * `AnnotatorError::MissingAttribute` if an ancestor up to the boundary lacks `nr`
pub fn find_markers(root: Node<'_, '_>, boundary_tag: &str) -> Result<Vec<MarkerLocation>> {
    let mut markers = Vec::new();

    for node in root.descendants().filter(Node::is_element) {
        let text = node_text(node);
        if !text.contains([']', '…']) {
            continue;
        }

        let Some(boundary) = ancestor_elements(node).find(|a| get_tag_name(*a) == boundary_tag)
        else {
            tracing::debug!(
                tag = %get_tag_name(node),
                boundary = boundary_tag,
                "Markers outside boundary element, skipping"
            );
            continue;
        };

        let path = build_path(node, boundary)?;

        for (position, c) in text.char_indices() {
            let Some(kind) = MarkerKind::from_char(c) else {
                continue;
            };

            match next_footnote(node, position) {
                Ok(footnote) => markers.push(MarkerLocation {
                    kind,
                    footnote,
                    path: path.clone(),
                }),
                Err(err @ AnnotatorError::FootnoteNotFound { .. }) => {
                    tracing::warn!(path = %path, error = %err, "Skipping marker");
                }
                Err(err) => return Err(err),
            }
        }
    }

    tracing::debug!(markers = markers.len(), "Marker scan complete");
    Ok(markers)
}
