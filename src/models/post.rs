use serde::{Deserialize, Serialize};

/// A stored blog post, as read back from the `blog_posts` table.
#[derive(Debug, Clone, Serialize)]
pub struct BlogPost {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub published: bool,
    pub featured: bool,
    /// Comma-joined tag list.
    pub tags: String,
    pub meta_title: String,
    pub meta_description: String,
    pub reading_time: u32,
    pub view_count: i64,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

impl BlogPost {
    pub fn tag_list(&self) -> Vec<String> {
        split_tags(&self.tags)
    }

    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            id: self.id,
            title: self.title.clone(),
            slug: self.slug.clone(),
            excerpt: self.excerpt.clone(),
            author: self.author.clone(),
            published: self.published,
            featured: self.featured,
            tags: self.tag_list(),
            reading_time: self.reading_time,
            view_count: self.view_count,
            created_at: self.created_at.clone(),
            updated_at: self.updated_at.clone(),
            published_at: self.published_at.clone(),
        }
    }

    pub fn into_detail(self) -> PostDetail {
        let summary = self.to_summary();
        PostDetail {
            summary,
            content: self.content,
            meta_title: self.meta_title,
            meta_description: self.meta_description,
        }
    }
}

/// List representation: everything except the body and SEO fields.
#[derive(Debug, Clone, Serialize)]
pub struct PostSummary {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub excerpt: String,
    pub author: String,
    pub published: bool,
    pub featured: bool,
    pub tags: Vec<String>,
    pub reading_time: u32,
    pub view_count: i64,
    pub created_at: String,
    pub updated_at: String,
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub summary: PostSummary,
    pub content: String,
    pub meta_title: String,
    pub meta_description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    pub blogs: Vec<PostSummary>,
    pub total: i64,
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
}

/// Tags arrive either as a comma-separated string or as a JSON array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TagsInput {
    List(Vec<String>),
    Joined(String),
}

impl TagsInput {
    pub fn into_list(self) -> Vec<String> {
        match self {
            Self::List(tags) => tags,
            Self::Joined(joined) => split_tags(&joined),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreatePost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub excerpt: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    pub tags: Option<TagsInput>,
    pub meta_title: Option<String>,
    #[serde(alias = "meta_desc")]
    pub meta_description: Option<String>,
}

/// Sparse update: `None` leaves the stored value alone, `Some("")` clears it.
#[derive(Debug, Default, Deserialize)]
pub struct UpdatePost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub tags: Option<TagsInput>,
    pub meta_title: Option<String>,
    #[serde(alias = "meta_desc")]
    pub meta_description: Option<String>,
}

/// Raw query-string parameters for the listing endpoint. Everything is kept
/// as text so that malformed values fall back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub featured: Option<String>,
    pub published: Option<String>,
}

/// Row predicate shared by the count and fetch halves of a listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PostFilter {
    pub published: Option<bool>,
    pub featured: Option<bool>,
    /// Lowercased search term; matched as a substring.
    pub search: Option<String>,
}

/// A fully derived record ready to be inserted.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub author: String,
    pub published: bool,
    pub featured: bool,
    pub tags: String,
    pub meta_title: String,
    pub meta_description: String,
    pub reading_time: u32,
    pub created_at: String,
    pub published_at: Option<String>,
}

/// Column changes for a partial update. `updated_at` is always written.
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub published: Option<bool>,
    pub featured: Option<bool>,
    pub tags: Option<String>,
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub reading_time: Option<u32>,
    pub published_at: Option<Option<String>>,
    pub updated_at: String,
}

pub fn split_tags(joined: &str) -> Vec<String> {
    joined
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

pub fn join_tags<I, S>(tags: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .map(|tag| tag.as_ref().trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
