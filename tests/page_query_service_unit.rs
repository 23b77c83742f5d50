use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use bramble::application::error::ApplicationError;
use bramble::application::queries::pages::{PageQueryService, PostDetailPageQuery, TagPageQuery};
use bramble::domain::blog::entity::{Comment, Post, PostDetail, Tag};
use bramble::domain::blog::query::{PostOrder, PostQuery};
use bramble::domain::blog::repository::BlogReadRepository;
use bramble::domain::blog::value_objects::{PostId, PostSlug, TagTitle};
use bramble::domain::errors::DomainResult;

struct InMemoryBlogRepo {
    posts: Vec<Post>,
    tags: Vec<Tag>,
    comments: HashMap<i64, Vec<Comment>>,
}

#[async_trait]
impl BlogReadRepository for InMemoryBlogRepo {
    async fn posts(&self, query: PostQuery) -> DomainResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .posts
            .iter()
            .filter(|post| match &query.tag {
                Some(tag) => post.tags.iter().any(|t| t.title == *tag),
                None => true,
            })
            .cloned()
            .collect();

        match query.order {
            PostOrder::Popular => posts.sort_by(|a, b| b.likes_count.cmp(&a.likes_count)),
            PostOrder::Fresh => posts.sort_by(|a, b| b.published_at.cmp(&a.published_at)),
        }
        posts.truncate(query.limit as usize);
        Ok(posts)
    }

    async fn popular_tags(&self, limit: u32) -> DomainResult<Vec<Tag>> {
        let mut tags = self.tags.clone();
        tags.sort_by(|a, b| b.posts_count.cmp(&a.posts_count));
        tags.truncate(limit as usize);
        Ok(tags)
    }

    async fn find_post_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostDetail>> {
        let post = self.posts.iter().find(|post| post.slug == *slug).cloned();
        Ok(post.map(|post| {
            let comments = self
                .comments
                .get(&i64::from(post.id))
                .cloned()
                .unwrap_or_default();
            PostDetail { post, comments }
        }))
    }

    async fn find_tag_by_title(&self, title: &TagTitle) -> DomainResult<Option<Tag>> {
        Ok(self.tags.iter().find(|tag| tag.title == *title).cloned())
    }
}

fn at(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, hour, 0, 0).unwrap()
}

fn tag(title: &str, posts_count: i64) -> Tag {
    Tag {
        title: TagTitle::new(title).unwrap(),
        posts_count,
    }
}

fn post(id: i64, slug: &str, hour: u32, likes: i64, tags: Vec<Tag>) -> Post {
    Post {
        id: PostId::new(id).unwrap(),
        title: format!("Post {id}"),
        body: "body ".repeat(60),
        slug: PostSlug::new(slug).unwrap(),
        image_url: None,
        published_at: at(hour),
        author: "alice".into(),
        tags,
        comments_count: id,
        likes_count: likes,
    }
}

fn service_with(repo: InMemoryBlogRepo) -> PageQueryService {
    PageQueryService::new(Arc::new(repo))
}

fn seven_posts() -> Vec<Post> {
    (1..=7)
        .map(|id| {
            let tags = if id % 2 == 0 {
                vec![tag("django", 3), tag("rust", 4)]
            } else {
                vec![tag("rust", 4)]
            };
            // Likes deliberately uncorrelated with recency.
            post(id, &format!("post-{id}"), id as u32, (id * 3) % 7, tags)
        })
        .collect()
}

fn fixture() -> InMemoryBlogRepo {
    InMemoryBlogRepo {
        posts: seven_posts(),
        tags: vec![
            tag("rust", 4),
            tag("django", 3),
            tag("sql", 2),
            tag("http", 1),
            tag("tokio", 1),
            tag("tera", 1),
        ],
        comments: HashMap::from([(
            1,
            vec![Comment {
                text: "first!".into(),
                author: "bob".into(),
                published_at: at(9),
            }]),
        ]),
    }
}

#[tokio::test]
async fn index_popular_posts_are_bounded_and_sorted_by_likes() {
    let service = service_with(fixture());
    let page = service.index_page().await.unwrap();

    assert_eq!(page.most_popular_posts.len(), 5);

    // The fixture sorts by like count; recover each card's likes through its id
    // encoded in the slug to check the ordering is non-increasing.
    let likes: Vec<i64> = page
        .most_popular_posts
        .iter()
        .map(|card| {
            let id: i64 = card.slug.trim_start_matches("post-").parse().unwrap();
            (id * 3) % 7
        })
        .collect();
    assert!(likes.windows(2).all(|pair| pair[0] >= pair[1]), "{likes:?}");
}

#[tokio::test]
async fn index_fresh_posts_are_the_newest_five_shown_oldest_first() {
    let service = service_with(fixture());
    let page = service.index_page().await.unwrap();

    assert_eq!(page.page_posts.len(), 5);
    // Posts 3..=7 are the five most recent; reversed for display.
    let slugs: Vec<&str> = page.page_posts.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, ["post-3", "post-4", "post-5", "post-6", "post-7"]);

    let stamps: Vec<_> = page.page_posts.iter().map(|c| c.published_at).collect();
    assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn index_popular_tags_are_bounded_and_sorted() {
    let service = service_with(fixture());
    let page = service.index_page().await.unwrap();

    assert_eq!(page.popular_tags.len(), 5);
    assert_eq!(page.popular_tags[0].title, "rust");
    assert_eq!(page.popular_tags[1].title, "django");
    let counts: Vec<i64> = page.popular_tags.iter().map(|t| t.posts_with_tag).collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));
}

#[tokio::test]
async fn post_detail_unknown_slug_is_not_found() {
    let service = service_with(fixture());
    let err = service
        .post_detail_page(PostDetailPageQuery {
            slug: "no-such-post".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn post_detail_whitespace_slug_is_not_found() {
    let service = service_with(fixture());
    let err = service
        .post_detail_page(PostDetailPageQuery { slug: "   ".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn post_detail_known_slug_builds_full_context() {
    let service = service_with(fixture());
    let page = service
        .post_detail_page(PostDetailPageQuery {
            slug: "post-1".into(),
        })
        .await
        .unwrap();

    assert_eq!(page.post.slug, "post-1");
    assert_eq!(page.post.comments.len(), 1);
    assert_eq!(page.post.comments[0].author, "bob");
    assert_eq!(page.post.likes_amount, 3);
    assert!(page.post.text.len() > 200, "detail body is not truncated");
    assert_eq!(page.popular_tags.len(), 5);
    assert_eq!(page.most_popular_posts.len(), 5);
}

#[tokio::test]
async fn tag_page_unknown_title_is_not_found() {
    let service = service_with(fixture());
    let err = service
        .tag_page(TagPageQuery {
            title: "no-such-tag".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn tag_page_whitespace_title_is_not_found() {
    let service = service_with(fixture());
    let err = service
        .tag_page(TagPageQuery { title: "   ".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotFound(_)), "{err:?}");
}

#[tokio::test]
async fn tag_page_lists_only_posts_carrying_the_tag() {
    let service = service_with(fixture());
    let page = service
        .tag_page(TagPageQuery {
            title: "django".into(),
        })
        .await
        .unwrap();

    assert_eq!(page.tag, "django");
    assert!(!page.posts.is_empty());
    assert!(page.posts.len() <= 20);
    for card in &page.posts {
        assert!(
            card.tags.iter().any(|t| t.title == "django"),
            "{} lacks the tag",
            card.slug
        );
    }
}

#[tokio::test]
async fn tag_page_window_is_twenty() {
    let mut repo = fixture();
    repo.posts = (1..=30)
        .map(|id| post(id, &format!("post-{id}"), 1, id, vec![tag("rust", 30)]))
        .collect();
    let service = service_with(repo);

    let page = service
        .tag_page(TagPageQuery {
            title: "rust".into(),
        })
        .await
        .unwrap();
    assert_eq!(page.posts.len(), 20);
}

#[tokio::test]
async fn tagless_post_surfaces_as_invariant_error() {
    let mut repo = fixture();
    repo.posts.push(post(8, "orphan", 8, 100, vec![]));
    let service = service_with(repo);

    let err = service.index_page().await.unwrap_err();
    assert!(matches!(err, ApplicationError::Invariant(_)));
}
