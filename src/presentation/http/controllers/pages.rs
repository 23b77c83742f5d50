// src/presentation/http/controllers/pages.rs
use crate::application::queries::pages::{PostDetailPageQuery, TagPageQuery};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use crate::presentation::http::templates::render_page;
use axum::{Extension, extract::Path, response::Html};
use tera::Context;

pub async fn index(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    let context = state.services.page_queries.index_page().await.into_http()?;
    render_page(&state.templates, "index.html", &context).map_err(|e| HttpError::render_failure(&e))
}

pub async fn post_detail(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Html<String>> {
    let context = state
        .services
        .page_queries
        .post_detail_page(PostDetailPageQuery { slug })
        .await
        .into_http()?;
    render_page(&state.templates, "post-details.html", &context)
        .map_err(|e| HttpError::render_failure(&e))
}

pub async fn tag_filter(
    Extension(state): Extension<HttpState>,
    Path(title): Path<String>,
) -> HttpResult<Html<String>> {
    let context = state
        .services
        .page_queries
        .tag_page(TagPageQuery { title })
        .await
        .into_http()?;
    render_page(&state.templates, "posts-list.html", &context)
        .map_err(|e| HttpError::render_failure(&e))
}

/// Placeholder page: no visit tracking or feedback capture lives here.
pub async fn contacts(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    state
        .templates
        .render("contacts.html", &Context::new())
        .map(Html)
        .map_err(|e| HttpError::render_failure(&e))
}
