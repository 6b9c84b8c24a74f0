use super::error::PostError;
use super::pagination::{ListQuery, PageMeta};
use super::slug::{generate_slug, validate_slug, with_suffix};
use super::store::{PostStore, SlugConflict};
use super::text::{calculate_reading_time, generate_excerpt};
use super::validation::{prepare_create, prepare_update};
use crate::models::{BlogPost, CreatePost, NewPost, PostChanges, PostDetail, PostPage, UpdatePost};
use anyhow::anyhow;
use chrono::{SecondsFormat, Utc};

/// Fallback base used when a title slugifies to nothing (e.g. "!!!").
const EMPTY_SLUG_BASE: &str = "post";
const MAX_SLUG_SUFFIXES: u32 = 1000;
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Fixed-width UTC timestamp so that text ordering matches time ordering.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// One page of post summaries plus pagination metadata.
///
/// Count and fetch are separate store calls; if writes land between them
/// `total` may be off by those writes, but the page never holds more than
/// `query.limit` items.
pub fn list_posts(store: &dyn PostStore, query: &ListQuery) -> Result<PostPage, PostError> {
    let total = store.count(&query.filter)?;
    let meta = PageMeta::new(total, query.page, query.limit);

    let posts = store.find_page(&query.filter, query.offset(), query.limit)?;
    let blogs = posts
        .iter()
        .take(query.limit)
        .map(BlogPost::to_summary)
        .collect();

    Ok(PostPage {
        blogs,
        total,
        page: query.page,
        limit: query.limit,
        total_pages: meta.total_pages,
        has_next: meta.has_next,
        has_prev: meta.has_prev,
    })
}

/// Published post by slug. Bumps the view counter on the way out; a failed
/// bump is logged and otherwise ignored.
pub fn get_post_by_slug(store: &dyn PostStore, slug: &str) -> Result<PostDetail, PostError> {
    if !validate_slug(slug) {
        return Err(PostError::NotFound);
    }

    let post = store
        .find_published_by_slug(slug)?
        .ok_or(PostError::NotFound)?;

    if let Err(e) = store.increment_views(post.id) {
        tracing::warn!("Failed to increment view count for post {}: {:#}", post.id, e);
    }

    Ok(post.into_detail())
}

pub fn create_post(
    store: &dyn PostStore,
    input: CreatePost,
    excerpt_length: usize,
) -> Result<PostDetail, PostError> {
    let draft = prepare_create(input)?;

    let excerpt = if draft.excerpt.is_empty() {
        generate_excerpt(&draft.content, excerpt_length)
    } else {
        draft.excerpt
    };
    let now = now_timestamp();
    let base = slug_base(&draft.title);

    let mut post = NewPost {
        slug: unique_slug(store, &draft.title, None)?,
        reading_time: calculate_reading_time(&draft.content),
        published_at: draft.published.then(|| now.clone()),
        title: draft.title,
        content: draft.content,
        excerpt,
        author: draft.author,
        published: draft.published,
        featured: draft.featured,
        tags: draft.tags,
        meta_title: draft.meta_title,
        meta_description: draft.meta_description,
        created_at: now,
    };

    let mut attempt = 1;
    let id = loop {
        match store.insert(&post) {
            Ok(id) => break id,
            // Lost a race with a concurrent create for the same slug.
            Err(e)
                if e.downcast_ref::<SlugConflict>().is_some() && attempt < MAX_INSERT_ATTEMPTS =>
            {
                tracing::debug!("Slug '{}' taken during insert, retrying", post.slug);
                post.slug = disambiguate(store, &base, None)?;
                attempt += 1;
            }
            Err(e) => return Err(e.into()),
        }
    };

    tracing::info!("Created post {} ({})", id, post.slug);
    fetch_detail(store, id)
}

pub fn update_post(
    store: &dyn PostStore,
    id: i64,
    input: UpdatePost,
) -> Result<PostDetail, PostError> {
    let draft = prepare_update(input)?;
    let current = store.find_by_id(id)?.ok_or(PostError::NotFound)?;
    let now = now_timestamp();

    let mut changes = PostChanges {
        excerpt: draft.excerpt,
        author: draft.author,
        published: draft.published,
        featured: draft.featured,
        tags: draft.tags,
        meta_title: draft.meta_title,
        meta_description: draft.meta_description,
        ..Default::default()
    };

    if let Some(title) = draft.title {
        // A suffixed slug stays put as long as the title maps to the same base.
        if slug_base(&title) != slug_base(&current.title) {
            changes.slug = Some(unique_slug(store, &title, Some(id))?);
        }
        changes.title = Some(title);
    }

    if let Some(content) = draft.content {
        changes.reading_time = Some(calculate_reading_time(&content));
        changes.content = Some(content);
    }

    changes.published_at = match draft.published {
        Some(true) if current.published_at.is_none() => Some(Some(now.clone())),
        Some(false) => Some(None),
        _ => None,
    };
    changes.updated_at = now;

    if !store.update_fields(id, &changes)? {
        return Err(PostError::NotFound);
    }

    fetch_detail(store, id)
}

pub fn delete_post(store: &dyn PostStore, id: i64) -> Result<(), PostError> {
    if store.delete(id)? {
        tracing::info!("Deleted post {}", id);
        Ok(())
    } else {
        Err(PostError::NotFound)
    }
}

/// Slug for `title` that no post other than `except_id` is using.
pub fn unique_slug(
    store: &dyn PostStore,
    title: &str,
    except_id: Option<i64>,
) -> Result<String, PostError> {
    let base = slug_base(title);
    if !store.slug_taken(&base, except_id)? {
        return Ok(base);
    }
    disambiguate(store, &base, except_id)
}

fn slug_base(title: &str) -> String {
    let slug = generate_slug(title);
    if slug.is_empty() {
        EMPTY_SLUG_BASE.to_string()
    } else {
        slug
    }
}

/// `base-<unix seconds>`, then `base-<unix seconds>-2`, `-3`, ...
fn disambiguate(
    store: &dyn PostStore,
    base: &str,
    except_id: Option<i64>,
) -> Result<String, PostError> {
    let stamp = Utc::now().timestamp();
    for n in 1..=MAX_SLUG_SUFFIXES {
        let suffix = if n == 1 {
            format!("-{}", stamp)
        } else {
            format!("-{}-{}", stamp, n)
        };
        let candidate = with_suffix(base, &suffix);
        if !store.slug_taken(&candidate, except_id)? {
            return Ok(candidate);
        }
    }
    Err(anyhow!("no free slug for '{}' after {} attempts", base, MAX_SLUG_SUFFIXES).into())
}

fn fetch_detail(store: &dyn PostStore, id: i64) -> Result<PostDetail, PostError> {
    store
        .find_by_id(id)?
        .map(BlogPost::into_detail)
        .ok_or_else(|| anyhow!("post {} missing after write", id).into())
}
