//! Canonical city keys.
//!
//! "são-paulo", "Sao Paulo" and "SAO PAULO" all map to "Sao Paulo", which is
//! the key used in the coordinate cache and the name sent to the geocoder.

use std::ffi::OsStr;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a city name: hyphens become spaces, diacritics are stripped,
/// whitespace is collapsed and every word is title-cased.
pub fn normalize(raw: &str) -> String {
    let dehyphenated = raw.replace('-', " ");
    let stripped: String = dehyphenated
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .collect();

    stripped
        .split_whitespace()
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalize a raw command-line argument. Non-UTF-8 bytes are replaced with
/// U+FFFD before normalizing.
pub fn normalize_os(raw: &OsStr) -> String {
    match raw.to_str() {
        Some(s) => normalize(s),
        None => {
            let lossy = raw.to_string_lossy();
            tracing::warn!(city = %lossy, "city name is not valid UTF-8, decoding lossily");
            normalize(&lossy)
        }
    }
}

/// Upper-case the first character and lower-case the rest. Only the first
/// character of a multi-character upper-case mapping stays upper case
/// ("ßtadt" -> "Sstadt"), so the result maps to itself.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let mut out: String = upper.next().into_iter().collect();
    out.extend(upper.flat_map(char::to_lowercase));
    out.extend(chars.flat_map(char::to_lowercase));
    out
}
