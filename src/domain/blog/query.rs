// src/domain/blog/query.rs
use crate::domain::blog::value_objects::TagTitle;

/// Ordering applied to a post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostOrder {
    /// Descending distinct like count.
    Popular,
    /// Descending published timestamp.
    Fresh,
}

/// Explicit query specification for a post listing: ordering, optional tag
/// filter and an exact limit. Repositories execute it as a single shaped
/// query (plus one batched tag prefetch) and never return more than `limit`
/// rows.
#[derive(Debug, Clone)]
pub struct PostQuery {
    pub order: PostOrder,
    pub tag: Option<TagTitle>,
    pub limit: u32,
}

impl PostQuery {
    pub fn popular(limit: u32) -> Self {
        Self {
            order: PostOrder::Popular,
            tag: None,
            limit,
        }
    }

    pub fn fresh(limit: u32) -> Self {
        Self {
            order: PostOrder::Fresh,
            tag: None,
            limit,
        }
    }

    pub fn with_tag(mut self, tag: TagTitle) -> Self {
        self.tag = Some(tag);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::value_objects::TagTitle;

    #[test]
    fn builders_set_order_and_filter() {
        let q = PostQuery::popular(5);
        assert_eq!(q.order, PostOrder::Popular);
        assert!(q.tag.is_none());
        assert_eq!(q.limit, 5);

        let q = PostQuery::popular(20).with_tag(TagTitle::new("django").unwrap());
        assert_eq!(q.tag.as_ref().map(|t| t.as_str()), Some("django"));
        assert_eq!(q.limit, 20);

        let q = PostQuery::fresh(5);
        assert_eq!(q.order, PostOrder::Fresh);
    }
}
