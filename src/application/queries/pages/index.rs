use super::PageQueryService;
use super::service::{FRESH_WINDOW, serialize_cards};
use crate::application::dto::IndexPageDto;
use crate::application::error::ApplicationResult;
use crate::domain::blog::PostQuery;

impl PageQueryService {
    /// Assemble the home page: the five most popular posts, the five freshest
    /// posts displayed oldest-first, and the five most used tags.
    pub async fn index_page(&self) -> ApplicationResult<IndexPageDto> {
        let most_popular_posts = self.popular_posts().await?;

        let mut fresh = self.repo.posts(PostQuery::fresh(FRESH_WINDOW)).await?;
        // The repository returns newest-first; the template shows the window
        // oldest-first.
        fresh.reverse();
        let page_posts = serialize_cards(&fresh)?;

        let popular_tags = self.popular_tags().await?;

        Ok(IndexPageDto {
            most_popular_posts,
            page_posts,
            popular_tags,
        })
    }
}
