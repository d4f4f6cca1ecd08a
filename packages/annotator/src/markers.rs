//! Marker-aware pattern generation and marker stripping.
//!
//! Amended passages are delimited in node text by `[` ... `]` followed by a
//! footnote annotation (`<sup style="font-size:60%"> 2) </sup>`). Omitted
//! passages are replaced by `…` followed by the same annotation.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::Result;

/// Regex matching every marker form `regexify` rewrites.
///
/// A bare `]` or `…` is listed after its annotated form, so the annotated
/// form wins wherever both match.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static MARKER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?P<open>\[ ?)",
        r#"|(?P<close>\],? ?<sup style="font-size:60%">\s*\d+\)\s*</sup>,? ?)"#,
        r"|(?P<bare_close>\])",
        r#"|(?P<omission> ?… ?<sup style="font-size:60%">\s*\d+\)\s*</sup>,? ?)"#,
        r"|(?P<bare_omission> ?…)",
        r"|(?P<space_comma> ,)",
    ))
    .expect("valid regex")
});

/// Regex matching a complete footnote annotation as written in source text.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static FOOTNOTE_ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<sup style="font-size:60%">\s*\d+\)\s*</sup>"#).expect("valid regex")
});

const OPEN_FRAGMENT: &str = r"(\[? ?)?";
const CLOSE_FRAGMENT: &str = r#"(\],? ?<sup( style="font-size:60%")?>\s*\d+\)\s*</sup>)?,? ?"#;
const BARE_CLOSE_FRAGMENT: &str = r"\]?";
const OMISSION_FRAGMENT: &str = r#" ?(… ?<sup( style="font-size:60%")?>\s*\d+\)\s*</sup>)?,? ?"#;
const BARE_OMISSION_FRAGMENT: &str = r" ?…?";
const SPACE_COMMA_FRAGMENT: &str = r" ?,";

/// Turn marker-bearing text into a pattern that matches it with and without markers.
///
/// Text between markers is escaped, so the pattern always matches the input
/// it was built from. Marker punctuation becomes optional groups:
///
/// 1. `[` with an optional trailing space
/// 2. `]` plus footnote annotation, tolerating a missing `style` attribute
///    and surrounding comma/space; a bare `]` is simply optional
/// 3. `…` plus footnote annotation (omitted text), together with the space
///    before it; a bare `…` is simply optional
/// 4. a space before a comma becomes optional
///
/// # Examples
/// ```
/// use lagasafn_annotator::markers::{regexify, strip};
/// use regex::Regex;
///
/// let text = r#"Ráðherra [skal] <sup style="font-size:60%"> 2) </sup> setja reglur."#;
/// let re = Regex::new(&regexify(text)).unwrap();
/// assert!(re.is_match(text));
/// assert!(re.is_match(&strip(text)));
/// ```
#[must_use]
pub fn regexify(text: &str) -> String {
    let mut pattern = String::with_capacity(text.len() * 2);
    let mut last = 0;

    for caps in MARKER_TOKEN.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };

        pattern.push_str(&regex::escape(&text[last..whole.start()]));

        let fragment = if caps.name("open").is_some() {
            OPEN_FRAGMENT
        } else if caps.name("close").is_some() {
            CLOSE_FRAGMENT
        } else if caps.name("bare_close").is_some() {
            BARE_CLOSE_FRAGMENT
        } else if caps.name("omission").is_some() {
            OMISSION_FRAGMENT
        } else if caps.name("bare_omission").is_some() {
            BARE_OMISSION_FRAGMENT
        } else {
            SPACE_COMMA_FRAGMENT
        };
        pattern.push_str(fragment);

        last = whole.end();
    }

    pattern.push_str(&regex::escape(&text[last..]));
    pattern
}

/// Compile the marker-tolerant pattern for `text`.
///
/// The pattern is unanchored; use `find` to check how much of a candidate
/// text it covers.
pub fn marker_regex(text: &str) -> Result<Regex> {
    Ok(Regex::new(&regexify(text))?)
}

/// Remove markers from text and tidy the spacing they leave behind.
///
/// Removes `…`, `[`, `]` and footnote annotations, collapses runs of spaces
/// and drops a space before a comma. Repeats until nothing changes, so
/// `strip(strip(t)) == strip(t)` holds even for nested annotations.
///
/// # Examples
/// ```
/// use lagasafn_annotator::markers::strip;
///
/// let text = r#"Forseti … <sup style="font-size:60%"> 3) </sup> skal kjörinn."#;
/// assert_eq!(strip(text), "Forseti skal kjörinn.");
/// ```
#[must_use]
pub fn strip(text: &str) -> String {
    let mut result = strip_once(text);
    loop {
        let next = strip_once(&result);
        if next == result {
            break;
        }
        result = next;
    }
    result
}

fn strip_once(text: &str) -> String {
    let text = text.replace(['…', '[', ']'], "");
    let mut text = FOOTNOTE_ANNOTATION.replace_all(&text, "").into_owned();

    while text.contains("  ") {
        text = text.replace("  ", " ");
    }

    text.replace(" ,", ",")
}
