//! XML utility functions for navigating and extracting data from DOM trees.

use roxmltree::{Document, Node, ParsingOptions};

use crate::error::Result;

/// Parse a law document.
///
/// DTDs are allowed since published law files may declare entities.
pub fn parse_document(xml: &str) -> Result<Document<'_>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(xml, options)?)
}

/// Get the tag name without namespace prefix.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use lagasafn_annotator::xml::get_tag_name;
///
/// let xml = r#"<law><art nr="1"/></law>"#;
/// let doc = Document::parse(xml).unwrap();
/// let art = doc.root_element().first_element_child().unwrap();
/// assert_eq!(get_tag_name(art), "art");
/// ```
pub fn get_tag_name<'a>(node: Node<'a, '_>) -> &'a str {
    node.tag_name().name()
}

/// Get an attribute value from a node.
pub fn get_attribute<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.attribute(name)
}

/// Get the node's own leading text, untrimmed.
///
/// This is the text before the node's first child element, which is where
/// sentence text and its markers live. Returns an empty string for nodes
/// without text.
pub fn node_text<'a>(node: Node<'a, '_>) -> &'a str {
    node.text().unwrap_or("")
}

/// Get the element following this one among its parent's children.
///
/// Text and comment nodes in between are skipped.
pub fn next_element_sibling<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.next_sibling_element()
}

/// Iterate over ancestor elements, nearest first, excluding the node itself.
pub fn ancestor_elements<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    std::iter::successors(node.parent_element(), |n| n.parent_element())
}

/// 1-based position of an element among its siblings with the same tag.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use lagasafn_annotator::xml::order_among_siblings;
///
/// let xml = r#"<subart nr="1"><nr-title/><sen>A</sen><sen>B</sen></subart>"#;
/// let doc = Document::parse(xml).unwrap();
/// let second = doc.descendants().filter(|n| n.has_tag_name("sen")).nth(1).unwrap();
/// assert_eq!(order_among_siblings(second), 2);
/// ```
pub fn order_among_siblings(node: Node<'_, '_>) -> usize {
    let tag = node.tag_name();
    1 + std::iter::successors(node.prev_sibling_element(), |n| n.prev_sibling_element())
        .filter(|sibling| sibling.tag_name() == tag)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAW: &str = r#"<law nr="33" year="1944">
        <art nr="1">
            <subart nr="1">
                <nr-title>1.</nr-title>
                <sen>Fyrsta.</sen>
                <!-- athugasemd -->
                <sen>Önnur.</sen>
                <sen>Þriðja.</sen>
            </subart>
        </art>
    </law>"#;

    fn sens<'a, 'input>(doc: &'a Document<'input>) -> Vec<Node<'a, 'input>> {
        doc.descendants().filter(|n| n.has_tag_name("sen")).collect()
    }

    #[test]
    fn test_parse_document() {
        let doc = parse_document(LAW).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "law");
    }

    #[test]
    fn test_parse_document_invalid() {
        assert!(parse_document("<law><art></law>").is_err());
    }

    #[test]
    fn test_get_tag_name_with_namespace() {
        let xml = r#"<ns:law xmlns:ns="http://example.com"><ns:art/></ns:law>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(get_tag_name(doc.root_element()), "law");
    }

    #[test]
    fn test_get_attribute() {
        let doc = Document::parse(LAW).unwrap();
        let root = doc.root_element();
        assert_eq!(get_attribute(root, "nr"), Some("33"));
        assert_eq!(get_attribute(root, "missing"), None);
    }

    #[test]
    fn test_node_text() {
        let doc = Document::parse(LAW).unwrap();
        let sens = sens(&doc);
        assert_eq!(node_text(sens[0]), "Fyrsta.");

        let empty = Document::parse("<sen/>").unwrap();
        assert_eq!(node_text(empty.root_element()), "");
    }

    #[test]
    fn test_next_element_sibling_skips_comments() {
        let doc = Document::parse(LAW).unwrap();
        let sens = sens(&doc);
        assert_eq!(next_element_sibling(sens[0]), Some(sens[1]));
        assert_eq!(next_element_sibling(sens[2]), None);
    }

    #[test]
    fn test_ancestor_elements() {
        let doc = Document::parse(LAW).unwrap();
        let sens = sens(&doc);
        let tags: Vec<_> = ancestor_elements(sens[0]).map(get_tag_name).collect();
        assert_eq!(tags, vec!["subart", "art", "law"]);
    }

    #[test]
    fn test_order_among_siblings_counts_same_tag_only() {
        let doc = Document::parse(LAW).unwrap();
        let positions: Vec<_> = sens(&doc).into_iter().map(order_among_siblings).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }
}
