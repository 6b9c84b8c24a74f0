//! Sanitizing and length checks for incoming post data. Everything here runs
//! before the store is touched.

use super::error::ValidationErrors;
use super::text::sanitize_text;
use crate::models::{join_tags, CreatePost, TagsInput, UpdatePost};

pub const TITLE_MAX: usize = 255;
pub const CONTENT_MIN: usize = 10;
pub const AUTHOR_MAX: usize = 100;
pub const EXCERPT_MAX: usize = 500;
pub const META_TITLE_MAX: usize = 60;
pub const META_DESCRIPTION_MAX: usize = 160;
pub const TAGS_MAX: usize = 500;

/// Sanitized create input. An empty `excerpt` means "derive one".
#[derive(Debug, Clone)]
pub struct CreateDraft {
    pub title: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub published: bool,
    pub featured: bool,
    pub tags: String,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateDraft {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub tags: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
}

pub fn prepare_create(input: CreatePost) -> Result<CreateDraft, ValidationErrors> {
    let draft = CreateDraft {
        title: sanitize_text(&input.title),
        content: sanitize_text(&input.content),
        excerpt: input.excerpt.as_deref().map(sanitize_text).unwrap_or_default(),
        author: sanitize_text(&input.author),
        published: input.published,
        featured: input.featured,
        tags: input.tags.map(sanitize_tags).unwrap_or_default(),
        meta_title: input.meta_title.as_deref().map(sanitize_text).unwrap_or_default(),
        meta_description: input
            .meta_description
            .as_deref()
            .map(sanitize_text)
            .unwrap_or_default(),
    };

    let mut errors = ValidationErrors::default();
    check_title(&mut errors, &draft.title);
    check_content(&mut errors, &draft.content);
    check_author(&mut errors, &draft.author);
    check_optional_fields(
        &mut errors,
        Some(&draft.excerpt),
        Some(&draft.tags),
        Some(&draft.meta_title),
        Some(&draft.meta_description),
    );
    errors.into_result()?;

    Ok(draft)
}

pub fn prepare_update(input: UpdatePost) -> Result<UpdateDraft, ValidationErrors> {
    let draft = UpdateDraft {
        title: input.title.as_deref().map(sanitize_text),
        content: input.content.as_deref().map(sanitize_text),
        excerpt: input.excerpt.as_deref().map(sanitize_text),
        author: input.author.as_deref().map(sanitize_text),
        published: input.published,
        featured: input.featured,
        tags: input.tags.map(sanitize_tags),
        meta_title: input.meta_title.as_deref().map(sanitize_text),
        meta_description: input.meta_description.as_deref().map(sanitize_text),
    };

    let mut errors = ValidationErrors::default();
    if let Some(title) = &draft.title {
        check_title(&mut errors, title);
    }
    if let Some(content) = &draft.content {
        check_content(&mut errors, content);
    }
    if let Some(author) = &draft.author {
        check_author(&mut errors, author);
    }
    check_optional_fields(
        &mut errors,
        draft.excerpt.as_ref(),
        draft.tags.as_ref(),
        draft.meta_title.as_ref(),
        draft.meta_description.as_ref(),
    );
    errors.into_result()?;

    Ok(draft)
}

fn sanitize_tags(tags: TagsInput) -> String {
    join_tags(tags.into_list().iter().map(|tag| sanitize_text(tag)))
}

fn check_title(errors: &mut ValidationErrors, title: &str) {
    check_length(errors, "title", title, 1, TITLE_MAX);
}

fn check_content(errors: &mut ValidationErrors, content: &str) {
    check_length(errors, "content", content, CONTENT_MIN, usize::MAX);
}

fn check_author(errors: &mut ValidationErrors, author: &str) {
    check_length(errors, "author", author, 1, AUTHOR_MAX);
}

fn check_optional_fields(
    errors: &mut ValidationErrors,
    excerpt: Option<&String>,
    tags: Option<&String>,
    meta_title: Option<&String>,
    meta_description: Option<&String>,
) {
    if let Some(v) = excerpt {
        check_length(errors, "excerpt", v, 0, EXCERPT_MAX);
    }
    if let Some(v) = tags {
        check_length(errors, "tags", v, 0, TAGS_MAX);
    }
    if let Some(v) = meta_title {
        check_length(errors, "meta_title", v, 0, META_TITLE_MAX);
    }
    if let Some(v) = meta_description {
        check_length(errors, "meta_description", v, 0, META_DESCRIPTION_MAX);
    }
}

fn check_length(errors: &mut ValidationErrors, field: &'static str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len == 0 && min > 0 {
        errors.push(field, "is required");
    } else if len < min {
        errors.push(field, format!("must be at least {} characters", min));
    } else if len > max {
        errors.push(field, format!("must be at most {} characters", max));
    }
}
