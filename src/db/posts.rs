use super::Database;
use crate::models::{BlogPost, NewPost, PostChanges, PostFilter};
use crate::services::store::{PostStore, SlugConflict};
use anyhow::Result;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, ErrorCode, OptionalExtension};

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, author, published, featured, tags, meta_title, meta_description, reading_time, view_count, created_at, updated_at, published_at";

/// [`PostStore`] backed by the `blog_posts` table.
#[derive(Clone)]
pub struct SqlitePostStore {
    db: Database,
}

impl SqlitePostStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

impl PostStore for SqlitePostStore {
    fn count(&self, filter: &PostFilter) -> Result<i64> {
        let conn = self.db.get()?;
        let (clause, params) = where_clause(filter);
        let sql = format!("SELECT COUNT(*) FROM blog_posts{}", clause);
        let count: i64 = conn.query_row(&sql, params_from_iter(params.iter()), |row| row.get(0))?;
        Ok(count)
    }

    fn find_page(
        &self,
        filter: &PostFilter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<BlogPost>> {
        let conn = self.db.get()?;
        let (clause, mut params) = where_clause(filter);
        let sql = format!(
            "SELECT {} FROM blog_posts{} ORDER BY created_at DESC, id DESC LIMIT ? OFFSET ?",
            POST_COLUMNS, clause
        );
        params.push(Value::Integer(to_sql_int(limit)));
        params.push(Value::Integer(to_sql_int(offset)));

        let mut stmt = conn.prepare(&sql)?;
        let posts = stmt
            .query_map(params_from_iter(params.iter()), row_to_post)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(posts)
    }

    fn find_by_id(&self, id: i64) -> Result<Option<BlogPost>> {
        let conn = self.db.get()?;
        let post = conn
            .query_row(
                &format!("SELECT {} FROM blog_posts WHERE id = ?", POST_COLUMNS),
                [id],
                row_to_post,
            )
            .optional()?;
        Ok(post)
    }

    fn find_published_by_slug(&self, slug: &str) -> Result<Option<BlogPost>> {
        let conn = self.db.get()?;
        let post = conn
            .query_row(
                &format!(
                    "SELECT {} FROM blog_posts WHERE slug = ? AND published = 1",
                    POST_COLUMNS
                ),
                [slug],
                row_to_post,
            )
            .optional()?;
        Ok(post)
    }

    fn slug_taken(&self, slug: &str, except_id: Option<i64>) -> Result<bool> {
        let conn = self.db.get()?;
        let taken: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM blog_posts WHERE slug = ?1 AND (?2 IS NULL OR id != ?2))",
            (slug, except_id),
            |row| row.get(0),
        )?;
        Ok(taken)
    }

    fn insert(&self, post: &NewPost) -> Result<i64> {
        let conn = self.db.get()?;
        conn.execute(
            r#"
            INSERT INTO blog_posts (title, slug, content, excerpt, author, published, featured, tags, meta_title, meta_description, reading_time, view_count, created_at, updated_at, published_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?, ?)
            "#,
            rusqlite::params![
                &post.title,
                &post.slug,
                &post.content,
                &post.excerpt,
                &post.author,
                post.published,
                post.featured,
                &post.tags,
                &post.meta_title,
                &post.meta_description,
                post.reading_time,
                &post.created_at,
                &post.created_at,
                &post.published_at,
            ],
        )
        .map_err(|e| slug_error(e, &post.slug))?;
        Ok(conn.last_insert_rowid())
    }

    fn update_fields(&self, id: i64, changes: &PostChanges) -> Result<bool> {
        let mut sets: Vec<&str> = Vec::new();
        let mut params: Vec<Value> = Vec::new();

        let mut text = |column: &'static str, value: &Option<String>| {
            if let Some(v) = value {
                sets.push(column);
                params.push(Value::Text(v.clone()));
            }
        };
        text("title = ?", &changes.title);
        text("slug = ?", &changes.slug);
        text("content = ?", &changes.content);
        text("excerpt = ?", &changes.excerpt);
        text("author = ?", &changes.author);
        text("tags = ?", &changes.tags);
        text("meta_title = ?", &changes.meta_title);
        text("meta_description = ?", &changes.meta_description);

        if let Some(published) = changes.published {
            sets.push("published = ?");
            params.push(Value::Integer(published.into()));
        }
        if let Some(featured) = changes.featured {
            sets.push("featured = ?");
            params.push(Value::Integer(featured.into()));
        }
        if let Some(reading_time) = changes.reading_time {
            sets.push("reading_time = ?");
            params.push(Value::Integer(reading_time.into()));
        }
        if let Some(published_at) = &changes.published_at {
            sets.push("published_at = ?");
            params.push(published_at.clone().map(Value::Text).unwrap_or(Value::Null));
        }
        sets.push("updated_at = ?");
        params.push(Value::Text(changes.updated_at.clone()));
        params.push(Value::Integer(id));

        let sql = format!("UPDATE blog_posts SET {} WHERE id = ?", sets.join(", "));
        let conn = self.db.get()?;
        let updated = conn
            .execute(&sql, params_from_iter(params.iter()))
            .map_err(|e| match &changes.slug {
                Some(slug) => slug_error(e, slug),
                None => e.into(),
            })?;
        Ok(updated > 0)
    }

    fn increment_views(&self, id: i64) -> Result<()> {
        let conn = self.db.get()?;
        conn.execute(
            "UPDATE blog_posts SET view_count = view_count + 1 WHERE id = ?",
            [id],
        )?;
        Ok(())
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.db.get()?;
        let deleted = conn.execute("DELETE FROM blog_posts WHERE id = ?", [id])?;
        Ok(deleted > 0)
    }
}

fn where_clause(filter: &PostFilter) -> (String, Vec<Value>) {
    let mut sql = String::from(" WHERE 1=1");
    let mut params: Vec<Value> = Vec::new();

    if let Some(published) = filter.published {
        sql.push_str(" AND published = ?");
        params.push(Value::Integer(published.into()));
    }
    if let Some(featured) = filter.featured {
        sql.push_str(" AND featured = ?");
        params.push(Value::Integer(featured.into()));
    }
    if let Some(search) = &filter.search {
        sql.push_str(
            " AND (unicode_lower(title) LIKE ? ESCAPE '\\' OR unicode_lower(content) LIKE ? ESCAPE '\\' OR unicode_lower(excerpt) LIKE ? ESCAPE '\\' OR unicode_lower(tags) LIKE ? ESCAPE '\\')",
        );
        let pattern = format!("%{}%", escape_like(&search.to_lowercase()));
        for _ in 0..4 {
            params.push(Value::Text(pattern.clone()));
        }
    }

    (sql, params)
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn to_sql_int(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn slug_error(err: rusqlite::Error, slug: &str) -> anyhow::Error {
    match &err {
        rusqlite::Error::SqliteFailure(e, Some(msg))
            if e.code == ErrorCode::ConstraintViolation && msg.contains("blog_posts.slug") =>
        {
            anyhow::Error::new(SlugConflict(slug.to_string())).context(err.to_string())
        }
        _ => err.into(),
    }
}

fn row_to_post(row: &rusqlite::Row) -> rusqlite::Result<BlogPost> {
    Ok(BlogPost {
        id: row.get(0)?,
        title: row.get(1)?,
        slug: row.get(2)?,
        content: row.get(3)?,
        excerpt: row.get(4)?,
        author: row.get(5)?,
        published: row.get(6)?,
        featured: row.get(7)?,
        tags: row.get(8)?,
        meta_title: row.get(9)?,
        meta_description: row.get(10)?,
        reading_time: row.get(11)?,
        view_count: row.get(12)?,
        created_at: row.get(13)?,
        updated_at: row.get(14)?,
        published_at: row.get(15)?,
    })
}
