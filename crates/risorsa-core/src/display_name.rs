//! Surname-first display names.
//!
//! External resources carry a fixed marker so the directory shows them apart.

use risorsa_model::PersonName;

/// Marker appended to display names of external resources.
///
/// Callers strip this exact text to recover the plain name, so it must not change.
pub const EXTERNAL_MARKER: &str = " (esterno)";

/// Joins the non-empty name parts surname-first: last, second last, first, second first.
pub fn build_display_name(
    last: &str,
    second_last: &str,
    first: &str,
    second_first: &str,
    is_external: bool,
) -> String {
    let parts: Vec<&str> = [last, second_last, first, second_first]
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    let mut full = parts.join(" ");
    if is_external {
        full.push_str(EXTERNAL_MARKER);
    }
    full
}

/// Display name for a person, with the marker when `is_external`.
pub fn display_name_for(name: &PersonName, is_external: bool) -> String {
    build_display_name(
        &name.last,
        &name.second_last,
        &name.first,
        &name.second_first,
        is_external,
    )
}

/// Removes the external marker if present.
pub fn strip_external_marker(display_name: &str) -> &str {
    display_name
        .strip_suffix(EXTERNAL_MARKER)
        .unwrap_or(display_name)
}
