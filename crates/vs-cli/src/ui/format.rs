//! Small text helpers for CLI output.

/// Truncate a string to at most `max_chars` characters, ending in `...`
/// when shortened.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 3 {
        return ".".repeat(max_chars);
    }
    let kept: String = s.chars().take(max_chars - 3).collect();
    format!("{}...", kept)
}

/// `1 project`, `2 projects`.
pub fn count_noun(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, plural)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hello", 2), "..");
    }

    #[test]
    fn test_truncate_str_counts_chars() {
        assert_eq!(truncate_str("ääääää", 5), "ää...");
        assert_eq!(truncate_str("ääää", 4), "ääää");
    }

    #[test]
    fn test_count_noun() {
        assert_eq!(count_noun(0, "item", "items"), "0 items");
        assert_eq!(count_noun(1, "item", "items"), "1 item");
        assert_eq!(count_noun(3, "project", "projects"), "3 projects");
    }
}
