//! Key naming conversion.

/// Converts a camel-case key to snake case.
///
/// Every uppercase character with a distinct lowercase form becomes `_`
/// followed by that form; everything else is copied as is. The output never
/// contains a character that would be rewritten again, so the conversion is
/// idempotent.
///
/// ```rust
/// use sublime_convert_core::normalize_key;
///
/// assert_eq!(normalize_key("lineHighlight"), "line_highlight");
/// assert_eq!(normalize_key("line_highlight"), "line_highlight");
/// assert_eq!(normalize_key("URL"), "_u_r_l");
/// ```
pub fn normalize_key(key: &str) -> String {
    let mut normalized = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if has_lowercase_form(c) {
            normalized.push('_');
            normalized.extend(c.to_lowercase());
        } else {
            normalized.push(c);
        }
    }
    normalized
}

/// Uppercase letters such as `𝐀` (U+1D400) have no lowercase mapping.
fn has_lowercase_form(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}
