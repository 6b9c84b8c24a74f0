use crate::models::{BlogPost, NewPost, PostChanges, PostFilter};
use anyhow::Result;

/// Persistence operations the post services are written against.
///
/// Each call is expected to be individually atomic. Nothing ties two calls
/// together, so a `count` followed by a `find_page` may observe different
/// snapshots when writes land in between.
pub trait PostStore: Send + Sync {
    fn count(&self, filter: &PostFilter) -> Result<i64>;

    /// Matching rows, newest first (`created_at DESC, id DESC`).
    fn find_page(&self, filter: &PostFilter, offset: usize, limit: usize)
        -> Result<Vec<BlogPost>>;

    fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>>;

    fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>>;

    /// Whether any post other than `except_id` already owns `slug`.
    fn slug_taken(&self, slug: &str, except_id: Option<i64>) -> Result<bool>;

    /// Returns the new row id. A unique-slug violation is reported as a
    /// [`SlugConflict`] inside the error chain.
    fn insert(&self, post: &NewPost) -> Result<i64>;

    /// Returns `false` if no row has this id.
    fn update_fields(&self, id: i64, changes: &PostChanges) -> Result<bool>;

    fn increment_views(&self, id: i64) -> Result<()>;

    /// Returns `false` if no row has this id.
    fn delete(&self, id: i64) -> Result<bool>;
}

#[derive(Debug, thiserror::Error)]
#[error("slug '{0}' is already in use")]
pub struct SlugConflict(pub String);
