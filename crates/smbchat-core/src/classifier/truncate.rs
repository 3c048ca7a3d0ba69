use std::borrow::Cow;

pub const ELLIPSIS: &str = "...";

/// Cap `text` at `max_words` whitespace-separated words.
///
/// Text within the limit is returned untouched. Longer text is re-joined with
/// single spaces and gets [`ELLIPSIS`] appended. A limit of zero disables
/// truncation.
pub fn truncate_words(text: &str, max_words: usize) -> Cow<'_, str> {
    if max_words == 0 {
        return Cow::Borrowed(text);
    }

    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(max_words).collect();
    if words.next().is_none() {
        return Cow::Borrowed(text);
    }

    let mut out = kept.join(" ");
    out.push_str(ELLIPSIS);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_words(n: usize) -> String {
        (1..=n)
            .map(|i| format!("w{i}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn sixty_words_capped_at_fifty() {
        let text = numbered_words(60);
        let truncated = truncate_words(&text, 50);
        assert_eq!(truncated, format!("{}...", numbered_words(50)));
        assert!(matches!(truncated, Cow::Owned(_)));
    }

    #[test]
    fn exactly_at_limit_is_untouched() {
        let text = numbered_words(50);
        let truncated = truncate_words(&text, 50);
        assert_eq!(truncated, text);
        assert!(matches!(truncated, Cow::Borrowed(_)));
    }

    #[test]
    fn short_text_keeps_original_spacing() {
        let text = "Hello,\n  world";
        assert_eq!(truncate_words(text, 50), text);
    }

    #[test]
    fn zero_disables_truncation() {
        let text = numbered_words(500);
        assert_eq!(truncate_words(&text, 0), text);
    }
}
