/// Shortens `text` to at most `max_chars` characters, ending in `...` when cut.
///
/// Counts characters rather than bytes so multi-byte text (emoji, accents) is never
/// split mid-character. The ellipsis is part of the limit.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let keep = max_chars.saturating_sub(3);
    let mut shortened: String = text.chars().take(keep).collect();
    shortened.push_str("...");
    shortened
}

/// Keeps the first `max_chars` characters of `text` and appends `...` when cut.
///
/// Unlike [`truncate_with_ellipsis`] the marker is added on top of the limit.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let mut shortened: String = text.chars().take(max_chars).collect();
    shortened.push_str("...");
    shortened
}
