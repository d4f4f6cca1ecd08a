//! Reassembly of dot-delimited chunks into sentences.

use super::chunks::ChunkCursor;
use super::protect::{protect_abbreviations, protect_tables, restore_dots};
use crate::config::SegmenterConfig;
use crate::markers::strip;

/// Characters that, right after a dot, show the clause is still going.
const CONTINUATION_PUNCTUATION: &[char] = &[',', ';', '–', '-', '[', ']', '…'];

/// Why a dot was judged not to end its sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The next chunk starts with a space and a lowercase letter.
    Lowercase,
    /// The next chunk starts with continuation punctuation.
    Punctuation,
    /// The next chunk starts with a digit.
    Number,
    /// The dot sits inside a chained cross-reference.
    CrossReference,
}

/// Split a block of legal prose into sentences.
///
/// Each dot ends a sentence unless the text after it reads as a
/// continuation (see [`Continuation`]). Dots inside configured
/// abbreviations and tables never end a sentence. Sentences are trimmed and
/// returned in input order; empty or whitespace-only input yields none.
///
/// # Examples
/// ```
/// use lagasafn_annotator::config::SegmenterConfig;
/// use lagasafn_annotator::segmentation::separate_sentences;
///
/// let config = SegmenterConfig::default();
/// assert_eq!(
///     separate_sentences("Hann fór. Hún kom.", &config),
///     vec!["Hann fór.", "Hún kom."]
/// );
/// ```
#[must_use]
pub fn separate_sentences(text: &str, config: &SegmenterConfig) -> Vec<String> {
    let protected = protect_abbreviations(text.trim(), &config.abbreviations);
    let protected = protect_tables(protected, &config.table_start, &config.table_end);

    let mut sentences = Vec::new();
    let mut collected = String::new();
    let mut chunks = ChunkCursor::new(&protected);

    while let Some(chunk) = chunks.next() {
        if chunk.is_empty() {
            continue;
        }

        collected.push_str(chunk);

        let continuation = continuation(chunk, &chunks, config);
        if let Some(reason) = continuation {
            tracing::trace!(?reason, chunk, "Dot does not end sentence");
        }

        // The dot consumed by splitting always goes back in.
        collected.push('.');

        if continuation.is_none() {
            sentences.push(restore_dots(&collected).trim().to_string());
            collected.clear();
        }
    }

    // The final chunk got a dot back even when the text ended in something else.
    if !protected.ends_with('.') {
        if let Some(last) = sentences.last_mut() {
            if last.ends_with('.') {
                last.pop();
            }
        }
    }

    tracing::debug!(sentences = sentences.len(), "Separated sentences");
    sentences
}

/// Decide whether the dot after `chunk` continues the sentence.
fn continuation(
    chunk: &str,
    chunks: &ChunkCursor<'_>,
    config: &SegmenterConfig,
) -> Option<Continuation> {
    // Markers would hide how the next chunk really starts.
    let next = strip(chunks.peek(1)?);

    let mut chars = next.chars();
    let first = chars.next();
    let second = chars.next();

    if first == Some(' ') && second.is_some_and(char::is_lowercase) {
        return Some(Continuation::Lowercase);
    }

    if first.is_some_and(|c| CONTINUATION_PUNCTUATION.contains(&c)) {
        return Some(Continuation::Punctuation);
    }

    if first.is_some_and(|c| c.is_ascii_digit()) {
        return Some(Continuation::Number);
    }

    // "3. mgr. 4. tölul. 1. gr."
    let last_word = chunk.rsplit(' ').next().unwrap_or(chunk);
    if is_shorthand(last_word, config) && is_number(next.trim()) {
        let after_number = chunks.peek(2).map(str::trim);
        if after_number.is_some_and(|word| is_shorthand(word, config)) {
            return Some(Continuation::CrossReference);
        }
    }

    None
}

fn is_shorthand(word: &str, config: &SegmenterConfig) -> bool {
    config.reference_shorthands.iter().any(|s| s == word)
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn split(text: &str) -> Vec<String> {
        separate_sentences(text, &SegmenterConfig::default())
    }

    #[test]
    fn test_two_simple_sentences() {
        assert_eq!(split("Hann fór. Hún kom."), vec!["Hann fór.", "Hún kom."]);
    }

    #[test]
    fn test_no_dots_single_sentence() {
        assert_eq!(split("  Lög þessi öðlast gildi  "), vec!["Lög þessi öðlast gildi"]);
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert!(split("").is_empty());
        assert!(split("   \n\t ").is_empty());
        assert!(split("...").is_empty());
    }

    #[test]
    fn test_cross_reference_chain_with_abbreviation() {
        let config = SegmenterConfig::default().with_abbreviations(["Sbr."]);
        let text = "Sbr. 3. mgr. 4. tölul. 1. gr. skulu menn fara.";
        assert_eq!(separate_sentences(text, &config), vec![text]);
    }

    #[test]
    fn test_unknown_capitalised_abbreviation_splits() {
        assert_eq!(
            split("Sbr. 3. mgr. 4. tölul. 1. gr. skulu menn fara."),
            vec!["Sbr.", "3. mgr. 4. tölul. 1. gr. skulu menn fara."]
        );
    }

    #[test]
    fn test_cross_reference_before_number() {
        assert_eq!(
            split("Samkvæmt 2. mgr. 3. gr. laganna skal ráðherra setja reglur. Þær skulu birtar."),
            vec![
                "Samkvæmt 2. mgr. 3. gr. laganna skal ráðherra setja reglur.",
                "Þær skulu birtar."
            ]
        );
    }

    #[test]
    fn test_cross_reference_needs_following_shorthand() {
        assert_eq!(
            split("Vísað er til 1. mgr. 5. Sá liður fellur brott."),
            vec!["Vísað er til 1. mgr.", "5.", "Sá liður fellur brott."]
        );
    }

    #[test]
    fn test_cross_reference_at_end_of_text() {
        assert_eq!(split("Sjá 2. mgr. 3"), vec!["Sjá 2. mgr.", "3"]);
    }

    #[test]
    fn test_abbreviation_followed_by_name() {
        assert_eq!(
            split("Ráðherra getur t.d. sett reglur um gjöld. Þær skulu birtar."),
            vec!["Ráðherra getur t.d. sett reglur um gjöld.", "Þær skulu birtar."]
        );
        assert_eq!(
            split("Þetta á við a.m.k. Alþingi. Önnur setning."),
            vec!["Þetta á við a.m.k. Alþingi.", "Önnur setning."]
        );
    }

    #[test]
    fn test_ordinal_and_numbers() {
        assert_eq!(
            split("Lögin tóku gildi 1. janúar 2020. Þau gilda áfram."),
            vec!["Lögin tóku gildi 1. janúar 2020.", "Þau gilda áfram."]
        );
        assert_eq!(
            split("Verðið er 1.500 kr. Greitt árlega."),
            vec!["Verðið er 1.500 kr.", "Greitt árlega."]
        );
    }

    #[test]
    fn test_continuation_punctuation() {
        assert_eq!(
            split("Þetta er fyrsta atriðið.; annað atriðið. Nýtt."),
            vec!["Þetta er fyrsta atriðið.; annað atriðið.", "Nýtt."]
        );
        assert_eq!(
            split("Gildir til 1. jan.– 31. des. Lokið."),
            vec!["Gildir til 1. jan.– 31. des.", "Lokið."]
        );
    }

    #[test]
    fn test_markers_are_stripped_for_lookahead() {
        let text = r#"Gjaldið er ákveðið í 2. gr. [ sem breytt var] <sup style="font-size:60%"> 3) </sup> með lögum. Annað."#;
        assert_eq!(
            split(text),
            vec![
                r#"Gjaldið er ákveðið í 2. gr. [ sem breytt var] <sup style="font-size:60%"> 3) </sup> með lögum."#,
                "Annað."
            ]
        );
    }

    #[test]
    fn test_tables_are_never_split() {
        let text = r#"Taflan sýnir gjöld. <table width="100%"><tr><td>1.000 kr.</td><td>Gjald á ári.</td></tr></table> Gjaldið greiðist árlega."#;
        assert_eq!(
            split(text),
            vec![
                "Taflan sýnir gjöld.",
                r#"<table width="100%"><tr><td>1.000 kr.</td><td>Gjald á ári.</td></tr></table> Gjaldið greiðist árlega."#
            ]
        );
    }

    #[test]
    fn test_unterminated_table() {
        let text = r#"Fyrst. <table width="100%"><tr><td>1. liður. Annar.</td>"#;
        assert_eq!(
            split(text),
            vec![
                "Fyrst.",
                r#"<table width="100%"><tr><td>1. liður. Annar.</td>"#
            ]
        );
    }

    #[test]
    fn test_trailing_comma_gets_no_dot() {
        assert_eq!(
            split("Ráðherra setur reglur, t.d. um gjöld,"),
            vec!["Ráðherra setur reglur, t.d. um gjöld,"]
        );
        assert_eq!(split("Fyrsta. Önnur:"), vec!["Fyrsta.", "Önnur:"]);
    }

    #[test]
    fn test_trailing_abbreviation_keeps_its_dot() {
        assert_eq!(split("Bækur, blöð o.fl"), vec!["Bækur, blöð o.fl"]);
        assert_eq!(split("Hann nefndi t.d."), vec!["Hann nefndi t.d."]);
    }

    #[test]
    fn test_unmatched_brackets_do_not_panic() {
        assert_eq!(split("Hér [er. Hér] er. …"), vec!["Hér [er.", "Hér] er.", "…"]);
    }

    #[test]
    fn test_nested_markers() {
        let text = r#"[[A.] <sup style="font-size:60%"> 1) </sup> b] <sup style="font-size:60%"> 2) </sup> er. Næst."#;
        assert_eq!(
            split(text),
            vec![
                r#"[[A.] <sup style="font-size:60%"> 1) </sup> b] <sup style="font-size:60%"> 2) </sup> er."#,
                "Næst."
            ]
        );

        let capitalised = r#"[[A.] <sup style="font-size:60%"> 1) </sup> B] <sup style="font-size:60%"> 2) </sup> er. Næst."#;
        assert_eq!(
            split(capitalised),
            vec![
                "[[A.",
                r#"] <sup style="font-size:60%"> 1) </sup> B] <sup style="font-size:60%"> 2) </sup> er."#,
                "Næst."
            ]
        );
    }

    #[test]
    fn test_adjacent_markers() {
        let text = r#"Ráðherra [setur] <sup style="font-size:60%"> 1) </sup>[ reglur.] <sup style="font-size:60%"> 2) </sup> Þær gilda."#;
        assert_eq!(
            split(text),
            vec![
                r#"Ráðherra [setur] <sup style="font-size:60%"> 1) </sup>[ reglur."#,
                r#"] <sup style="font-size:60%"> 2) </sup> Þær gilda."#
            ]
        );

        let continued = r#"Ráðherra [setur] <sup style="font-size:60%"> 1) </sup>[ reglur.] <sup style="font-size:60%"> 2) </sup> um gjöld."#;
        assert_eq!(split(continued), vec![continued]);
    }

    #[test]
    fn test_alternate_configuration() {
        let config = SegmenterConfig::default()
            .with_abbreviations(["Dr."])
            .with_reference_shorthands(["para", "art"]);
        let text = "See 2. para. 5. art. of the Act. Dr. Smith agreed.";
        assert_eq!(
            separate_sentences(text, &config),
            vec!["See 2. para. 5. art. of the Act.", "Dr. Smith agreed."]
        );
    }

    #[test]
    fn test_continuation_reasons() {
        let config = SegmenterConfig::default();
        let reason = |chunk: &str, rest: &str| {
            let mut chunks = ChunkCursor::new(rest);
            chunks.next();
            continuation(chunk, &chunks, &config)
        };

        assert_eq!(reason("x", "x. og"), Some(Continuation::Lowercase));
        assert_eq!(reason("x", "x., og"), Some(Continuation::Punctuation));
        assert_eq!(reason("x", "x.5"), Some(Continuation::Number));
        assert_eq!(reason(" mgr", " mgr. 4. gr"), Some(Continuation::CrossReference));
        assert_eq!(reason("x", "x. Nýtt"), None);
        assert_eq!(reason("x", "x"), None);
    }
}
