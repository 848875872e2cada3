//! Manual field quoting for the directory import format.
//!
//! A field is wrapped in double quotes when it contains a space or the
//! `,` delimiter, so distinguished names keep the row at schema arity.
//! Embedded double quotes are not escaped; such values do not round-trip.

use std::borrow::Cow;

/// Field delimiter of the import files.
pub const DELIMITER: char = ',';

pub fn quote_field(value: &str) -> Cow<'_, str> {
    if value.contains([' ', DELIMITER]) {
        Cow::Owned(format!("\"{value}\""))
    } else {
        Cow::Borrowed(value)
    }
}

pub fn quote_row<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    values
        .iter()
        .map(|value| quote_field(value.as_ref()).into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_values_with_spaces_or_commas() {
        assert_eq!(quote_field("Mario Rossi"), "\"Mario Rossi\"");
        assert_eq!(quote_field("mario.rossi"), "mario.rossi");
        assert_eq!(quote_field(""), "");
        assert_eq!(quote_field("+39 3331234567"), "\"+39 3331234567\"");
        assert_eq!(
            quote_field("OU=Utenti,DC=consip,DC=it"),
            "\"OU=Utenti,DC=consip,DC=it\""
        );
        assert_eq!(quote_field("O365 Std;GRP_VPN"), "\"O365 Std;GRP_VPN\"");
        assert_eq!(quote_field("GRP_A;GRP_B"), "GRP_A;GRP_B");
    }

    #[test]
    fn leaves_embedded_quotes_alone() {
        assert_eq!(quote_field("a\"b"), "a\"b");
        assert_eq!(quote_field("a \"b\""), "\"a \"b\"\"");
    }
}
