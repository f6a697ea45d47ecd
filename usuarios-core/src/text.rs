//! Single-string transformations
//!
//! Every function is generic over `AsRef<str>` so it can be handed to the
//! combinators with either borrowed or owned input. Lengths and reversal
//! work on `char`s, not bytes, so accented names behave.

/// Uppercase every character.
pub fn uppercase<S: AsRef<str>>(text: S) -> String {
    text.as_ref().to_uppercase()
}

/// Lowercase every character.
pub fn lowercase<S: AsRef<str>>(text: S) -> String {
    text.as_ref().to_lowercase()
}

/// Uppercase the first letter of every run of letters and lowercase the rest.
///
/// Any non-alphabetic character starts a new word, so `"o'neil"` becomes
/// `"O'Neil"` and `"ana-maria"` becomes `"Ana-Maria"`.
pub fn title_case<S: AsRef<str>>(text: S) -> String {
    let text = text.as_ref();
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }

    out
}

/// Number of characters (not bytes).
pub fn length<S: AsRef<str>>(text: S) -> usize {
    text.as_ref().chars().count()
}

/// Character-reversed copy of `text`.
pub fn reverse<S: AsRef<str>>(text: S) -> String {
    text.as_ref().chars().rev().collect()
}

/// First letter of each non-empty name, uppercased. Empty names are skipped.
pub fn initials<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| name.as_ref().chars().next())
        .map(|first| first.to_uppercase().collect())
        .collect()
}
