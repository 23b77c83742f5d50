// src/application/services/mod.rs
use std::sync::Arc;

use crate::application::queries::pages::PageQueryService;
use crate::domain::blog::BlogReadRepository;

pub struct ApplicationServices {
    pub page_queries: Arc<PageQueryService>,
}

impl ApplicationServices {
    pub fn new(blog_repo: Arc<dyn BlogReadRepository>) -> Self {
        let page_queries = Arc::new(PageQueryService::new(Arc::clone(&blog_repo)));
        Self { page_queries }
    }
}
