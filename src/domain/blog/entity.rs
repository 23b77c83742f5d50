// src/domain/blog/entity.rs
//
// Read models for the page assembler. All counts are computed eagerly at the
// query boundary and arrive as plain fields; nothing here is lazy and nothing
// here mutates the store.
use crate::domain::blog::value_objects::{PostId, PostSlug, TagTitle};
use chrono::{DateTime, Utc};

/// A tag together with its annotated post count.
#[derive(Debug, Clone)]
pub struct Tag {
    pub title: TagTitle,
    pub posts_count: i64,
}

/// A post row shaped for page rendering: author and ordered tags are already
/// loaded, comment and like counts already aggregated.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub body: String,
    pub slug: PostSlug,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub author: String,
    pub tags: Vec<Tag>,
    pub comments_count: i64,
    pub likes_count: i64,
}

#[derive(Debug, Clone)]
pub struct Comment {
    pub text: String,
    pub author: String,
    pub published_at: DateTime<Utc>,
}

/// A post plus its full comment thread, for the detail page.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub comments: Vec<Comment>,
}
