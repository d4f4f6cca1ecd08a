//! Lagasafn annotator - markers, footnotes and sentences in Icelandic law texts.
//!
//! Amended passages in consolidated law texts are wrapped in brackets and
//! followed by a superscript footnote number; omitted passages are shown as
//! an ellipsis with the same annotation. This crate provides the text and
//! tree operations needed to annotate such documents.
//!
//! # Example
//!
//! ```
//! use lagasafn_annotator::{separate_sentences, strip, SegmenterConfig};
//!
//! let text = r#"Ráðherra [setur] <sup style="font-size:60%"> 2) </sup> reglur. Þær skulu birtar."#;
//! assert_eq!(strip(text), "Ráðherra setur reglur. Þær skulu birtar.");
//!
//! let sentences = separate_sentences(&strip(text), &SegmenterConfig::default());
//! assert_eq!(sentences, vec!["Ráðherra setur reglur.", "Þær skulu birtar."]);
//! ```
//!
//! # Architecture
//!
//! - [`markers`]: Marker-tolerant patterns and marker stripping
//! - [`footnote`]: Footnote number lookup, including the next sibling
//! - [`location`]: Location paths relative to a boundary ancestor
//! - [`segmentation`]: Sentence segmentation
//! - [`annotate`]: Marker scan over a whole document
//! - [`config`]: Constants and segmenter configuration
//! - [`error`]: Error types and Result alias
//! - [`xml`]: XML navigation helpers
//! - [`output`]: YAML/JSON rendering of scan results
//! - [`cli`]: Command-line interface

pub mod annotate;
pub mod cli;
pub mod config;
pub mod error;
pub mod footnote;
pub mod location;
pub mod markers;
pub mod output;
pub mod segmentation;
pub mod xml;

// Re-export commonly used items
pub use annotate::{find_markers, MarkerKind, MarkerLocation};
pub use config::SegmenterConfig;
pub use error::{AnnotatorError, ErrorKind, Result};
pub use footnote::{next_footnote, FootnoteNumber};
pub use location::{build_path, LocationPath, LocationStep};
pub use markers::{marker_regex, regexify, strip};
pub use segmentation::separate_sentences;
