use crate::application::dto::posts::{PostCardDto, PostDetailDto};
use crate::application::dto::tags::TagBadgeDto;
use serde::Serialize;

/// Template context for the home page.
#[derive(Debug, Clone, Serialize)]
pub struct IndexPageDto {
    pub most_popular_posts: Vec<PostCardDto>,
    pub page_posts: Vec<PostCardDto>,
    pub popular_tags: Vec<TagBadgeDto>,
}

/// Template context for the post detail page.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetailPageDto {
    pub post: PostDetailDto,
    pub popular_tags: Vec<TagBadgeDto>,
    pub most_popular_posts: Vec<PostCardDto>,
}

/// Template context for the tag listing page.
#[derive(Debug, Clone, Serialize)]
pub struct TagPageDto {
    pub tag: String,
    pub popular_tags: Vec<TagBadgeDto>,
    pub posts: Vec<PostCardDto>,
    pub most_popular_posts: Vec<PostCardDto>,
}
