//! Location paths addressing elements inside an article.
//!
//! Footnotes cite the place of a marker as a chain of tags, each carrying
//! the `nr` of the element it names:
//!
//! ```text
//! <art nr="5">                        <location>
//!   <subart nr="1">                     <art>5</art>
//!     <sen>[Notice the markers?]</sen>  <subart>1</subart>
//!   </subart>                           <sen>1</sen>
//! </art>                              </location>
//! ```

use std::fmt;

use roxmltree::Node;
use serde::Serialize;

use crate::error::{AnnotatorError, Result};
use crate::xml::{ancestor_elements, get_attribute, get_tag_name, order_among_siblings};

/// Attribute holding an element's human-assigned number.
const NR_ATTRIBUTE: &str = "nr";

/// One `(tag, identifier)` pair of a location path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationStep {
    /// Element tag name.
    pub tag: String,

    /// `nr` value, ordinal among siblings, or nothing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

impl LocationStep {
    /// Create a new step.
    #[must_use]
    pub fn new(tag: impl Into<String>, identifier: Option<impl Into<String>>) -> Self {
        Self {
            tag: tag.into(),
            identifier: identifier.map(Into::into),
        }
    }
}

impl fmt::Display for LocationStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.identifier {
            Some(id) => write!(f, "{}[{}]", self.tag, id),
            None => write!(f, "{}", self.tag),
        }
    }
}

/// Ordered address of an element, boundary ancestor first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LocationPath {
    steps: Vec<LocationStep>,
}

impl LocationPath {
    /// The steps, boundary ancestor first.
    #[must_use]
    pub fn steps(&self) -> &[LocationStep] {
        &self.steps
    }

    /// Number of steps.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the path has no steps. Paths from [`build_path`] never are.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Render as a `<location>` record.
    ///
    /// # Examples
    /// ```
    /// use roxmltree::Document;
    /// use lagasafn_annotator::location::build_path;
    ///
    /// let doc = Document::parse(r#"<art nr="5"><subart nr="1"><sen>x</sen></subart></art>"#).unwrap();
    /// let sen = doc.descendants().find(|n| n.has_tag_name("sen")).unwrap();
    /// let path = build_path(sen, doc.root_element()).unwrap();
    /// assert_eq!(
    ///     path.to_xml(),
    ///     "<location><art>5</art><subart>1</subart><sen>1</sen></location>"
    /// );
    /// ```
    #[must_use]
    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<location>");
        for step in &self.steps {
            match &step.identifier {
                Some(id) => {
                    xml.push_str(&format!("<{0}>{1}</{0}>", step.tag, escape_xml_text(id)));
                }
                None => xml.push_str(&format!("<{}/>", step.tag)),
            }
        }
        xml.push_str("</location>");
        xml
    }
}

impl fmt::Display for LocationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.steps.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("/"))
    }
}

/// Build the location path of `node` relative to `boundary`.
///
/// Every ancestor from the parent up to and including `boundary` contributes
/// its tag and `nr`. The node itself contributes its tag and, when it has no
/// `nr` of its own, its position among same-tag siblings. A node that does
/// carry `nr` contributes its tag only.
///
/// # Errors
/// * `AnnotatorError::NotAnAncestor` if `boundary` is not an ancestor of `node`
/// * `AnnotatorError::MissingAttribute` if an ancestor up to `boundary` has no `nr`
pub fn build_path(node: Node<'_, '_>, boundary: Node<'_, '_>) -> Result<LocationPath> {
    if !ancestor_elements(node).any(|ancestor| ancestor == boundary) {
        return Err(AnnotatorError::NotAnAncestor {
            tag: get_tag_name(node).to_string(),
            boundary: get_tag_name(boundary).to_string(),
        });
    }

    let mut steps = Vec::new();
    for ancestor in ancestor_elements(node) {
        let nr = get_attribute(ancestor, NR_ATTRIBUTE).ok_or_else(|| {
            AnnotatorError::MissingAttribute {
                tag: get_tag_name(ancestor).to_string(),
                attribute: NR_ATTRIBUTE.to_string(),
            }
        })?;
        steps.push(LocationStep::new(get_tag_name(ancestor), Some(nr)));

        if ancestor == boundary {
            break;
        }
    }
    steps.reverse();

    // TODO: emit the node's own nr once the citation store confirms it is not recovered elsewhere
    let terminal = if get_attribute(node, NR_ATTRIBUTE).is_some() {
        LocationStep::new(get_tag_name(node), None::<String>)
    } else {
        LocationStep::new(
            get_tag_name(node),
            Some(order_among_siblings(node).to_string()),
        )
    };
    steps.push(terminal);

    Ok(LocationPath { steps })
}

fn escape_xml_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
