//! Name fragment normalization.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

const APOSTROPHES: &[char] = &['\'', '\u{2018}', '\u{2019}', '`', '\u{00b4}'];

/// Reduces a name fragment to the token used for identifiers.
///
/// Diacritics are decomposed and dropped, spaces and apostrophes removed and
/// the rest lowercased. Anything left outside `[a-z0-9]` is dropped as well.
///
/// ```
/// use risorsa_core::normalize::normalize_name_part;
///
/// assert_eq!(normalize_name_part("Ève D'Angelo"), "evedangelo");
/// ```
pub fn normalize_name_part(raw: &str) -> String {
    raw.nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| !c.is_whitespace() && !APOSTROPHES.contains(c))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Display casing for one name part: trimmed, first letter upper-case, rest lower-case.
pub fn capitalize_part(raw: &str) -> String {
    let mut chars = raw.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// First character of an already normalized token, empty when the token is.
pub(crate) fn initial(token: &str) -> &str {
    token
        .char_indices()
        .nth(1)
        .map_or(token, |(idx, _)| &token[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_apostrophes() {
        assert_eq!(normalize_name_part("Ève D'Angelo"), "evedangelo");
        assert_eq!(normalize_name_part("Nicolò"), "nicolo");
        assert_eq!(normalize_name_part("D’Alessandro"), "dalessandro");
        assert_eq!(normalize_name_part("  De Luca "), "deluca");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_name_part(""), "");
        assert_eq!(normalize_name_part("   "), "");
    }

    #[test]
    fn drops_characters_without_ascii_base() {
        assert_eq!(normalize_name_part("Rossi-Bianchi"), "rossibianchi");
        assert_eq!(normalize_name_part("Łukasz"), "ukasz");
    }

    #[test]
    fn capitalizes_like_a_form_field() {
        assert_eq!(capitalize_part("  mARIO "), "Mario");
        assert_eq!(capitalize_part("della torre"), "Della torre");
        assert_eq!(capitalize_part("élodie"), "Élodie");
        assert_eq!(capitalize_part(""), "");
    }

    #[test]
    fn initial_of_token() {
        assert_eq!(initial("mario"), "m");
        assert_eq!(initial("m"), "m");
        assert_eq!(initial(""), "");
    }
}
