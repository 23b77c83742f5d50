// src/infrastructure/repositories/postgres_blog.rs
use super::map_sqlx;
use crate::domain::blog::{
    BlogReadRepository, Comment, Post, PostDetail, PostId, PostOrder, PostQuery, PostSlug, Tag,
    TagTitle,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use std::collections::HashMap;

/// Read side of the content store. Every listing is one aggregate query plus
/// one batched tag prefetch; per-row follow-up queries are never issued.
#[derive(Clone)]
pub struct PostgresBlogRepository {
    pool: PgPool,
}

impl PostgresBlogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: i64,
    title: String,
    body: String,
    slug: String,
    image_url: Option<String>,
    published_at: DateTime<Utc>,
    author: String,
    comments_count: i64,
    likes_count: i64,
}

impl PostRow {
    fn into_post(self, tags: Vec<Tag>) -> DomainResult<Post> {
        Ok(Post {
            id: PostId::new(self.id)?,
            title: self.title,
            body: self.body,
            slug: PostSlug::new(self.slug)?,
            image_url: self.image_url,
            published_at: self.published_at,
            author: self.author,
            tags,
            comments_count: self.comments_count,
            likes_count: self.likes_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct TagRow {
    title: String,
    posts_count: i64,
}

impl TryFrom<TagRow> for Tag {
    type Error = DomainError;

    fn try_from(row: TagRow) -> Result<Self, Self::Error> {
        Ok(Tag {
            title: TagTitle::new(row.title)?,
            posts_count: row.posts_count,
        })
    }
}

#[derive(Debug, FromRow)]
struct PostTagRow {
    post_id: i64,
    title: String,
    posts_count: i64,
}

#[derive(Debug, FromRow)]
struct CommentRow {
    text: String,
    author: String,
    published_at: DateTime<Utc>,
}

const POST_SELECT: &str = "SELECT p.id, p.title, p.body, p.slug, p.image_url, p.published_at, \
     u.username AS author, \
     COUNT(DISTINCT c.id) AS comments_count, \
     COUNT(DISTINCT l.user_id) AS likes_count \
     FROM posts p \
     JOIN users u ON u.id = p.author_id \
     LEFT JOIN comments c ON c.post_id = p.id \
     LEFT JOIN post_likes l ON l.post_id = p.id";

const POST_GROUP_BY: &str = " GROUP BY p.id, u.username";

impl PostgresBlogRepository {
    async fn fetch_post_rows(&self, query: &PostQuery) -> DomainResult<Vec<PostRow>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(POST_SELECT);

        if let Some(tag) = &query.tag {
            builder.push(
                " JOIN post_tags pt ON pt.post_id = p.id \
                 JOIN tags t ON t.id = pt.tag_id \
                 WHERE t.title = ",
            );
            builder.push_bind(tag.as_str().to_owned());
        }

        builder.push(POST_GROUP_BY);
        match query.order {
            PostOrder::Popular => builder.push(" ORDER BY likes_count DESC, p.id DESC"),
            PostOrder::Fresh => builder.push(" ORDER BY p.published_at DESC, p.id DESC"),
        };
        builder.push(" LIMIT ");
        builder.push_bind(i64::from(query.limit));

        builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)
    }

    /// Batched tag prefetch for a page of posts: one query for all post ids,
    /// ordered by the admin-assigned tag position so "first tag" is stable.
    async fn fetch_tags_for(&self, post_ids: &[i64]) -> DomainResult<HashMap<i64, Vec<Tag>>> {
        if post_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, PostTagRow>(
            "SELECT pt.post_id, t.title, \
             (SELECT COUNT(*) FROM post_tags pt2 WHERE pt2.tag_id = t.id) AS posts_count \
             FROM post_tags pt \
             JOIN tags t ON t.id = pt.tag_id \
             WHERE pt.post_id = ANY($1) \
             ORDER BY pt.post_id, pt.tag_order",
        )
        .bind(post_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut by_post: HashMap<i64, Vec<Tag>> = HashMap::new();
        for row in rows {
            by_post.entry(row.post_id).or_default().push(Tag {
                title: TagTitle::new(row.title)?,
                posts_count: row.posts_count,
            });
        }
        Ok(by_post)
    }

    async fn assemble_posts(&self, rows: Vec<PostRow>) -> DomainResult<Vec<Post>> {
        let ids: Vec<i64> = rows.iter().map(|row| row.id).collect();
        let mut tags_by_post = self.fetch_tags_for(&ids).await?;

        rows.into_iter()
            .map(|row| {
                let tags = tags_by_post.remove(&row.id).unwrap_or_default();
                row.into_post(tags)
            })
            .collect()
    }

    async fn fetch_comments(&self, post_id: i64) -> DomainResult<Vec<Comment>> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.text, u.username AS author, c.published_at \
             FROM comments c \
             JOIN users u ON u.id = c.author_id \
             WHERE c.post_id = $1 \
             ORDER BY c.id",
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(rows
            .into_iter()
            .map(|row| Comment {
                text: row.text,
                author: row.author,
                published_at: row.published_at,
            })
            .collect())
    }
}

#[async_trait]
impl BlogReadRepository for PostgresBlogRepository {
    async fn posts(&self, query: PostQuery) -> DomainResult<Vec<Post>> {
        let rows = self.fetch_post_rows(&query).await?;
        self.assemble_posts(rows).await
    }

    async fn popular_tags(&self, limit: u32) -> DomainResult<Vec<Tag>> {
        let rows = sqlx::query_as::<_, TagRow>(
            "SELECT t.title, COUNT(pt.post_id) AS posts_count \
             FROM tags t \
             LEFT JOIN post_tags pt ON pt.tag_id = t.id \
             GROUP BY t.id, t.title \
             ORDER BY posts_count DESC, t.id \
             LIMIT $1",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Tag::try_from).collect()
    }

    async fn find_post_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<PostDetail>> {
        let sql = format!("{POST_SELECT} WHERE p.slug = $1{POST_GROUP_BY}");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let post_id = row.id;
        let mut tags_by_post = self.fetch_tags_for(&[post_id]).await?;
        let post = row.into_post(tags_by_post.remove(&post_id).unwrap_or_default())?;
        let comments = self.fetch_comments(post_id).await?;

        Ok(Some(PostDetail { post, comments }))
    }

    async fn find_tag_by_title(&self, title: &TagTitle) -> DomainResult<Option<Tag>> {
        let row = sqlx::query_as::<_, TagRow>(
            "SELECT t.title, COUNT(pt.post_id) AS posts_count \
             FROM tags t \
             LEFT JOIN post_tags pt ON pt.tag_id = t.id \
             WHERE t.title = $1 \
             GROUP BY t.id, t.title",
        )
        .bind(title.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Tag::try_from).transpose()
    }
}
