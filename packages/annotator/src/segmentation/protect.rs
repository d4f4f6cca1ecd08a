//! Hiding dots that must not end a sentence.

use crate::config::DOT_PLACEHOLDER;

/// Replace the dots inside every occurrence of each abbreviation.
pub(crate) fn protect_abbreviations(text: &str, abbreviations: &[String]) -> String {
    let mut result = text.to_string();
    for abbreviation in abbreviations {
        if result.contains(abbreviation.as_str()) {
            let protected = abbreviation.replace('.', DOT_PLACEHOLDER);
            result = result.replace(abbreviation.as_str(), &protected);
        }
    }
    result
}

/// Replace the dots inside every table span.
///
/// A span runs from `start` to the first `end` after it, or to the end of
/// the text if the table is never closed. The search for the next table
/// resumes one character past the previous table's start, so the number of
/// passes is bounded by the occurrences of `start`.
pub(crate) fn protect_tables(text: String, start: &str, end: &str) -> String {
    let mut text = text;
    let max_passes = text.matches(start).count();
    let step = start.chars().next().map_or(1, char::len_utf8);
    let mut cursor = 0;

    for _ in 0..max_passes {
        let Some(offset) = text.get(cursor..).and_then(|rest| rest.find(start)) else {
            break;
        };
        let table_start = cursor + offset;

        let table_end = match text[table_start..].find(end) {
            Some(found) => table_start + found + end.len(),
            None => {
                tracing::warn!(
                    position = table_start,
                    "Unterminated table, protecting the rest of the text"
                );
                text.len()
            }
        };

        let protected = text[table_start..table_end].replace('.', DOT_PLACEHOLDER);
        text.replace_range(table_start..table_end, &protected);

        cursor = table_start + step;
    }

    text
}

/// Turn placeholders back into dots.
pub(crate) fn restore_dots(text: &str) -> String {
    text.replace(DOT_PLACEHOLDER, ".")
}
