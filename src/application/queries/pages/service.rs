use std::sync::Arc;

use crate::application::dto::{PostCardDto, TagBadgeDto};
use crate::application::error::ApplicationResult;
use crate::domain::blog::{BlogReadRepository, Post, PostQuery, Tag};

/// Window sizes are exact cutoffs, not hints; the repository contract
/// guarantees no listing exceeds them.
pub(super) const POPULAR_WINDOW: u32 = 5;
pub(super) const FRESH_WINDOW: u32 = 5;
pub(super) const TAG_WINDOW: u32 = 20;

pub struct PageQueryService {
    pub(super) repo: Arc<dyn BlogReadRepository>,
}

impl PageQueryService {
    pub fn new(repo: Arc<dyn BlogReadRepository>) -> Self {
        Self { repo }
    }

    pub(super) async fn popular_posts(&self) -> ApplicationResult<Vec<PostCardDto>> {
        let posts = self.repo.posts(PostQuery::popular(POPULAR_WINDOW)).await?;
        serialize_cards(&posts)
    }

    pub(super) async fn popular_tags(&self) -> ApplicationResult<Vec<TagBadgeDto>> {
        let tags = self.repo.popular_tags(POPULAR_WINDOW).await?;
        Ok(serialize_badges(&tags))
    }
}

pub(super) fn serialize_cards(posts: &[Post]) -> ApplicationResult<Vec<PostCardDto>> {
    posts.iter().map(PostCardDto::from_post).collect()
}

pub(super) fn serialize_badges(tags: &[Tag]) -> Vec<TagBadgeDto> {
    tags.iter().map(TagBadgeDto::from).collect()
}
