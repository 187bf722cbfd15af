//! Text helpers for search matching and display.

/// Fold a string for search comparison: strip accents, lowercase.
///
/// "Educação" and "educacao" fold to the same value, so filter search
/// works whether or not the user types the accents.
#[must_use]
pub fn fold(value: &str) -> String {
    deunicode::deunicode(value).to_lowercase()
}

/// Accent- and case-insensitive containment check.
#[must_use]
pub fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(&fold(needle))
}

/// Truncate to at most `max_chars` characters, appending `...` when cut.
///
/// Operates on characters, not bytes, so multi-byte text never splits
/// mid-codepoint.
#[must_use]
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }

    let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{kept}...")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("Educação"), "educacao");
        assert_eq!(fold("Jurídico"), "juridico");
        assert_eq!(fold("São Paulo"), "sao paulo");
    }

    #[test]
    fn test_contains_fold() {
        assert!(contains_fold("Coordenadora Pedagógica", "pedagogica"));
        assert!(contains_fold("Inovação", "INOVAÇÃO"));
        assert!(!contains_fold("Marketing", "jurídico"));
    }

    #[test]
    fn test_truncate_short_strings_unchanged() {
        assert_eq!(truncate("curto", 10), "curto");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate("uma descrição longa", 10), "uma des...");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        let truncated = truncate("éééééééééé", 5);
        assert_eq!(truncated, "éé...");
    }
}
