use crate::domain::blog::entity::{Post, PostDetail, Tag};
use crate::domain::blog::query::PostQuery;
use crate::domain::blog::value_objects::{PostSlug, TagTitle};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Read-only port over the content store. Implementations must honour the
/// query limits exactly and attach all annotated counts eagerly; callers
/// never issue follow-up queries per row.
#[async_trait]
pub trait BlogReadRepository: Send + Sync {
    async fn posts(&self, query: PostQuery) -> DomainResult<Vec<Post>>;
    async fn popular_tags(&self, limit: u32) -> DomainResult<Vec<Tag>>;
    async fn find_post_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostDetail>>;
    async fn find_tag_by_title(&self, title: &TagTitle) -> DomainResult<Option<Tag>>;
}
