pub mod pages;
pub mod posts;
pub mod tags;

pub use pages::{IndexPageDto, PostDetailPageDto, TagPageDto};
pub use posts::{CommentDto, PostCardDto, PostDetailDto, TEASER_CHARS};
pub use tags::TagBadgeDto;
