use super::PageQueryService;
use crate::application::dto::{PostDetailDto, PostDetailPageDto};
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::blog::PostSlug;

pub struct PostDetailPageQuery {
    pub slug: String,
}

impl PageQueryService {
    /// Assemble the detail page for one post, looked up by slug.
    pub async fn post_detail_page(
        &self,
        query: PostDetailPageQuery,
    ) -> ApplicationResult<PostDetailPageDto> {
        // A key that cannot even form a valid slug matches no post.
        let slug = PostSlug::new(query.slug)
            .map_err(|_| ApplicationError::not_found("post not found"))?;
        let detail = self
            .repo
            .find_post_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        Ok(PostDetailPageDto {
            post: PostDetailDto::from_detail(&detail),
            popular_tags: self.popular_tags().await?,
            most_popular_posts: self.popular_posts().await?,
        })
    }
}
