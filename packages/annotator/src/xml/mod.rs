//! Read-only navigation helpers over `roxmltree` document trees.

mod utils;

pub use utils::{
    ancestor_elements, get_attribute, get_tag_name, next_element_sibling, node_text,
    order_among_siblings, parse_document,
};
