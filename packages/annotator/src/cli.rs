//! Command-line interface for the annotator.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::annotate::find_markers;
use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::markers::{regexify, strip};
use crate::output::{render_markers, OutputFormat};
use crate::segmentation::separate_sentences;
use crate::xml::parse_document;

/// Lagasafn annotator - markers, footnotes and sentences in Icelandic law texts.
#[derive(Parser)]
#[command(name = "lagasafn-annotator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Remove markers from text.
    Strip {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Print a pattern matching the text with and without its markers.
    Regexify {
        /// Input file (default: stdin)
        input: Option<PathBuf>,
    },

    /// Split text into sentences, one per line.
    Sentences {
        /// Input file (default: stdin)
        input: Option<PathBuf>,

        /// Segmenter configuration in YAML (default: Icelandic law)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List every marker in a law XML file with its footnote and location.
    Locate {
        /// Law XML file
        input: PathBuf,

        /// Tag of the element location paths start from
        #[arg(short, long, default_value = "art")]
        boundary: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Strip { input } => {
            let text = read_input(input.as_deref())?;
            print!("{}", strip(&text));
            Ok(())
        }
        Commands::Regexify { input } => {
            let text = read_input(input.as_deref())?;
            println!("{}", regexify(text.trim_end_matches('\n')));
            Ok(())
        }
        Commands::Sentences { input, config } => {
            sentences_command(input.as_deref(), config.as_deref())
        }
        Commands::Locate {
            input,
            boundary,
            format,
        } => locate_command(&input, &boundary, format),
    }
}

/// Read a file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Execute the sentences command.
fn sentences_command(input: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let config = match config {
        Some(path) => SegmenterConfig::load(path)?,
        None => SegmenterConfig::default(),
    };
    let text = read_input(input)?;

    for sentence in separate_sentences(&text, &config) {
        println!("{sentence}");
    }

    Ok(())
}

/// Execute the locate command.
fn locate_command(input: &Path, boundary: &str, format: OutputFormat) -> Result<()> {
    let xml = std::fs::read_to_string(input)?;
    let doc = parse_document(&xml)?;
    let markers = find_markers(doc.root_element(), boundary)?;

    print!("{}", render_markers(&markers, boundary, format)?);

    eprintln!(
        "{} {} markers in {}",
        style("Found").bold(),
        style(markers.len()).cyan(),
        style(input.display()).green()
    );

    Ok(())
}
