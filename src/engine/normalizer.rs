// ============================================================================
// Normalizer
// Canonicalizes user-typed decimal text before parsing
// ============================================================================

/// Strip every whitespace character and map each comma to a decimal point.
///
/// Never fails. Whitespace is removed wherever it appears, so `"1 000,5"`
/// becomes `"1000.5"`. The whitespace set is the one browsers strip from
/// form input: Unicode `White_Space` plus the byte-order mark U+FEFF, minus
/// NEL (U+0085).
///
/// # Example
/// ```
/// use fincalc::normalize;
///
/// assert_eq!(normalize(" -12 345,67\t"), "-12345.67");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|&c| !is_form_whitespace(c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect()
}

/// Whitespace as stripped from pasted form text.
fn is_form_whitespace(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{85}')
}
