use crate::domain::blog::Tag;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagBadgeDto {
    pub title: String,
    pub posts_with_tag: i64,
}

impl From<&Tag> for TagBadgeDto {
    fn from(tag: &Tag) -> Self {
        Self {
            title: tag.title.as_str().to_owned(),
            posts_with_tag: tag.posts_count,
        }
    }
}
