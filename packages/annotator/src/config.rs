//! Configuration constants and the sentence segmenter configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnnotatorError, Result};

/// Opening tag of a footnote annotation, as it appears in node text.
pub const FOOTNOTE_SUP_OPEN: &str = r#"<sup style="font-size:60%">"#;

/// Closing tag of a footnote annotation.
pub const FOOTNOTE_SUP_CLOSE: &str = "</sup>";

/// Token standing in for dots that must not end a sentence.
///
/// Restored to a literal dot before a sentence is emitted.
pub const DOT_PLACEHOLDER: &str = "[DOT]";

/// Default start marker of an embedded table.
pub const DEFAULT_TABLE_START: &str = r#"<table width="100%">"#;

/// Default end marker of an embedded table.
pub const DEFAULT_TABLE_END: &str = "</table>";

/// Abbreviations whose dots never end a sentence.
///
/// Abbreviations that may close a sentence are listed without their final
/// dot ("o.fl"), those that are practically never sentence-final keep it
/// ("a.m.k."). A capitalised word following the latter is then read as a
/// name rather than the start of a new sentence.
pub const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "t.d.", "þ.m.t.", "sbr.", "nr.", "skv.", "m.a.", "a.m.k.", "þ.e.", "o.fl",
];

/// Shorthands used in chained cross-references such as "3. mgr. 4. tölul. 1. gr.".
pub const DEFAULT_REFERENCE_SHORTHANDS: &[&str] = &["gr", "mgr", "málsl", "tölul", "staf"];

/// Settings for [`crate::segmentation::separate_sentences`].
///
/// `Default` yields the configuration for Icelandic law. Missing keys in a
/// YAML file fall back to those defaults.
///
/// # Examples
/// ```
/// use lagasafn_annotator::config::SegmenterConfig;
///
/// let config = SegmenterConfig::default().with_abbreviations(["Sbr."]);
/// assert!(config.abbreviations.iter().any(|a| a == "Sbr."));
/// assert!(config.abbreviations.iter().any(|a| a == "t.d."));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    /// Abbreviations whose dots are protected from splitting.
    pub abbreviations: Vec<String>,

    /// Words that form chained numeric cross-references.
    pub reference_shorthands: Vec<String>,

    /// Marker opening a table span that is never split.
    pub table_start: String,

    /// Marker closing a table span.
    pub table_end: String,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|s| (*s).to_string()).collect(),
            reference_shorthands: DEFAULT_REFERENCE_SHORTHANDS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            table_start: DEFAULT_TABLE_START.to_string(),
            table_end: DEFAULT_TABLE_END.to_string(),
        }
    }
}

impl SegmenterConfig {
    /// Add abbreviations on top of the current ones.
    #[must_use]
    pub fn with_abbreviations(mut self, extra: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.abbreviations.extend(extra.into_iter().map(Into::into));
        self
    }

    /// Replace the reference shorthands.
    #[must_use]
    pub fn with_reference_shorthands(
        mut self,
        shorthands: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.reference_shorthands = shorthands.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the table markers.
    #[must_use]
    pub fn with_table_markers(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.table_start = start.into();
        self.table_end = end.into();
        self
    }

    /// Check that the configuration can drive the segmenter.
    ///
    /// # Returns
    /// * `Ok(())` if valid
    /// * `Err(AnnotatorError::InvalidConfig)` for empty table markers or
    ///   abbreviations without a dot
    pub fn validate(&self) -> Result<()> {
        if self.table_start.is_empty() || self.table_end.is_empty() {
            return Err(AnnotatorError::InvalidConfig(
                "table markers must not be empty".to_string(),
            ));
        }

        if let Some(bad) = self.abbreviations.iter().find(|a| !a.contains('.')) {
            return Err(AnnotatorError::InvalidConfig(format!(
                "abbreviation '{bad}' contains no dot"
            )));
        }

        if let Some(bad) = self
            .reference_shorthands
            .iter()
            .find(|s| s.is_empty() || s.contains(|c: char| c == '.' || c.is_whitespace()))
        {
            return Err(AnnotatorError::InvalidConfig(format!(
                "reference shorthand '{bad}' must be a single word without dots"
            )));
        }

        Ok(())
    }

    /// Parse and validate a configuration from YAML.
    ///
    /// # Examples
    /// ```
    /// use lagasafn_annotator::config::SegmenterConfig;
    ///
    /// let config = SegmenterConfig::from_yaml_str("reference_shorthands: [gr, mgr]").unwrap();
    /// assert_eq!(config.reference_shorthands, vec!["gr", "mgr"]);
    /// assert_eq!(config.table_end, "</table>");
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(
            path = %path.display(),
            abbreviations = config.abbreviations.len(),
            shorthands = config.reference_shorthands.len(),
            "Loaded segmenter configuration"
        );
        Ok(config)
    }
}
