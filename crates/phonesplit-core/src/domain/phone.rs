/// Strips whitespace, hyphens and parentheses. Every other character,
/// including a leading `+`, is kept as-is.
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|ch| !ch.is_whitespace() && !matches!(ch, '-' | '(' | ')'))
        .collect()
}

/// Returns the normalized number, or `None` for a missing or empty value.
pub fn normalized_or_none(value: Option<&str>) -> Option<String> {
    match value {
        Some(raw) if !raw.is_empty() => Some(normalize_phone(raw)),
        _ => None,
    }
}
