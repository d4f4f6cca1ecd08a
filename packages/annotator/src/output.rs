//! Serialization of marker scan results.

use clap::ValueEnum;
use serde::Serialize;

use crate::annotate::MarkerLocation;
use crate::error::Result;

/// Output format for marker locations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// YAML document.
    #[default]
    Yaml,
    /// Pretty-printed JSON.
    Json,
}

/// Marker scan results for one document.
#[derive(Debug, Serialize)]
struct MarkerReport<'a> {
    boundary: &'a str,
    markers: &'a [MarkerLocation],
}

/// Render marker locations found under `boundary` elements.
pub fn render_markers(
    markers: &[MarkerLocation],
    boundary: &str,
    format: OutputFormat,
) -> Result<String> {
    let report = MarkerReport { boundary, markers };
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml_ng::to_string(&report)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}
