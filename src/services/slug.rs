use slug::slugify;

pub const MAX_SLUG_LENGTH: usize = 100;

/// Lowercase ASCII slug, hyphen-separated, at most [`MAX_SLUG_LENGTH`] chars.
pub fn generate_slug(title: &str) -> String {
    let slug = slugify(title);
    truncate_slug(&slug, MAX_SLUG_LENGTH).to_string()
}

/// Appends `suffix` to `base`, shortening `base` so the result stays within
/// [`MAX_SLUG_LENGTH`].
pub fn with_suffix(base: &str, suffix: &str) -> String {
    let room = MAX_SLUG_LENGTH.saturating_sub(suffix.len());
    format!("{}{}", truncate_slug(base, room), suffix)
}

pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.len() > MAX_SLUG_LENGTH {
        return false;
    }
    !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--")
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// slugify only emits ASCII, so byte slicing is char-safe here.
fn truncate_slug(slug: &str, max: usize) -> &str {
    let cut = if slug.len() > max { &slug[..max] } else { slug };
    cut.trim_matches('-')
}
