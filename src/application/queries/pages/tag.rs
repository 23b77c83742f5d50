use super::PageQueryService;
use super::service::{TAG_WINDOW, serialize_cards};
use crate::application::dto::TagPageDto;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::blog::{PostQuery, TagTitle};

pub struct TagPageQuery {
    pub title: String,
}

impl PageQueryService {
    /// Assemble the tag listing page: up to twenty posts carrying the tag,
    /// plus the sitewide popular tags and posts.
    pub async fn tag_page(&self, query: TagPageQuery) -> ApplicationResult<TagPageDto> {
        // A key that cannot even form a valid tag title matches no tag.
        let title = TagTitle::new(query.title)
            .map_err(|_| ApplicationError::not_found("tag not found"))?;
        let tag = self
            .repo
            .find_tag_by_title(&title)
            .await?
            .ok_or_else(|| ApplicationError::not_found("tag not found"))?;

        let related = self
            .repo
            .posts(PostQuery::popular(TAG_WINDOW).with_tag(tag.title.clone()))
            .await?;

        Ok(TagPageDto {
            tag: tag.title.as_str().to_owned(),
            popular_tags: self.popular_tags().await?,
            posts: serialize_cards(&related)?,
            most_popular_posts: self.popular_posts().await?,
        })
    }
}
