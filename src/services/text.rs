use once_cell::sync::Lazy;
use regex::Regex;

pub const DEFAULT_EXCERPT_LENGTH: usize = 300;
pub const WORDS_PER_MINUTE: usize = 200;
pub const ELLIPSIS: &str = "...";

static HTML_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid HTML tag regex pattern"));

/// Drops control characters other than `\n`, `\t` and `\r`, then trims.
pub fn sanitize_text(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn strip_html_tags(content: &str) -> String {
    HTML_TAG.replace_all(content, " ").into_owned()
}

/// Minutes to read at [`WORDS_PER_MINUTE`]: 0 for empty content, else at
/// least 1. Markup is not counted.
pub fn calculate_reading_time(content: &str) -> u32 {
    if content.trim().is_empty() {
        return 0;
    }

    let word_count = strip_html_tags(content).split_whitespace().count();
    let minutes = word_count.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Plain-text excerpt of at most `max_len` chars (plus `...` when cut).
/// A `max_len` of 0 means [`DEFAULT_EXCERPT_LENGTH`].
pub fn generate_excerpt(content: &str, max_len: usize) -> String {
    let max_len = if max_len == 0 {
        DEFAULT_EXCERPT_LENGTH
    } else {
        max_len
    };

    let cleaned = strip_html_tags(content)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    truncate_at_word(&cleaned, max_len)
}

/// Cuts `text` to `max_len` chars on a word boundary and appends `...`.
/// A single word longer than `max_len` is hard-cut.
pub fn truncate_at_word(text: &str, max_len: usize) -> String {
    let cut = match text.char_indices().nth(max_len) {
        Some((idx, _)) => idx,
        None => return text.to_string(),
    };

    let head = &text[..cut];
    let ends_on_boundary = text[cut..].starts_with(char::is_whitespace);
    let kept = if ends_on_boundary {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(pos) if pos > 0 => &head[..pos],
            _ => head,
        }
    };

    format!("{}{}", kept.trim_end(), ELLIPSIS)
}
