mod index;
mod post_detail;
mod service;
mod tag;

pub use post_detail::PostDetailPageQuery;
pub use service::PageQueryService;
pub use tag::TagPageQuery;
