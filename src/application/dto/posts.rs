use crate::application::dto::tags::TagBadgeDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::blog::{Comment, Post, PostDetail};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Teaser length in characters (not bytes), matching the template contract.
pub const TEASER_CHARS: usize = 200;

/// Card-sized post representation used in every listing (popular, fresh,
/// tag-filtered). Pure data, ready for the template context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCardDto {
    pub title: String,
    pub teaser_text: String,
    pub author: String,
    pub comments_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<TagBadgeDto>,
    pub first_tag_title: String,
}

impl PostCardDto {
    /// Shape a post row into a card. Fails with an invariant error when the
    /// post carries no tags: the templates index on `first_tag_title`, so a
    /// tagless post cannot be rendered and the store is expected to forbid
    /// the state.
    pub fn from_post(post: &Post) -> ApplicationResult<Self> {
        let tags: Vec<TagBadgeDto> = post.tags.iter().map(TagBadgeDto::from).collect();
        let first_tag_title = tags
            .first()
            .map(|tag| tag.title.clone())
            .ok_or_else(|| {
                ApplicationError::invariant(format!("post '{}' has no tags", post.slug))
            })?;

        Ok(Self {
            title: post.title.clone(),
            teaser_text: teaser(&post.body),
            author: post.author.clone(),
            comments_amount: post.comments_count,
            image_url: post.image_url.clone(),
            published_at: post.published_at,
            slug: post.slug.as_str().to_owned(),
            tags,
            first_tag_title,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentDto {
    pub text: String,
    pub published_at: DateTime<Utc>,
    pub author: String,
}

impl From<&Comment> for CommentDto {
    fn from(comment: &Comment) -> Self {
        Self {
            text: comment.text.clone(),
            published_at: comment.published_at,
            author: comment.author.clone(),
        }
    }
}

/// Full post representation for the detail page: untruncated body, the whole
/// comment thread and the distinct like count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostDetailDto {
    pub title: String,
    pub text: String,
    pub author: String,
    pub comments: Vec<CommentDto>,
    pub likes_amount: i64,
    pub image_url: Option<String>,
    pub published_at: DateTime<Utc>,
    pub slug: String,
    pub tags: Vec<TagBadgeDto>,
}

impl PostDetailDto {
    pub fn from_detail(detail: &PostDetail) -> Self {
        let post = &detail.post;
        Self {
            title: post.title.clone(),
            text: post.body.clone(),
            author: post.author.clone(),
            comments: detail.comments.iter().map(CommentDto::from).collect(),
            likes_amount: post.likes_count,
            image_url: post.image_url.clone(),
            published_at: post.published_at,
            slug: post.slug.as_str().to_owned(),
            tags: post.tags.iter().map(TagBadgeDto::from).collect(),
        }
    }
}

fn teaser(body: &str) -> String {
    body.chars().take(TEASER_CHARS).collect()
}
