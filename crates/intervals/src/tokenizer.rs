//! Splits a raw producer field into individual producer names.
//!
//! The producer field is free text naming one or more producers:
//! `"Allan Carr"`, `"Steve Perry and Joel Silver"`,
//! `"Simon Kinberg, Matthew Vaughn and Hutch Parker"`. Both the English
//! `" and "` and the Portuguese `" e "` conjunctions act as separators,
//! alongside commas.
//!
//! Tokenization is purely lexical. A name that happens to contain one of the
//! separator words is split like any other occurrence, and capitalized
//! variants (`" And "`) are not separators.

use data_loader::ProducerName;

/// Conjunctions rewritten to commas, applied in this order
const SEPARATOR_WORDS: [&str; 2] = [" and ", " e "];

const NAME_SEPARATOR: char = ',';

/// Split a raw producer field into producer names.
///
/// # Returns
/// The trimmed, non-empty names in order of appearance. Duplicates are kept.
/// `None`, empty and whitespace-only input yield an empty vector.
pub fn tokenize(raw: Option<&str>) -> Vec<ProducerName> {
    let raw = match raw {
        Some(raw) if !raw.trim().is_empty() => raw,
        _ => return Vec::new(),
    };

    let normalized = SEPARATOR_WORDS
        .iter()
        .fold(raw.to_string(), |text, word| text.replace(word, ","));

    normalized
        .split(NAME_SEPARATOR)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
