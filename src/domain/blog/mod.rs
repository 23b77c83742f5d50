pub mod entity;
pub mod query;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, Post, PostDetail, Tag};
pub use query::{PostOrder, PostQuery};
pub use repository::BlogReadRepository;
pub use value_objects::{PostId, PostSlug, TagTitle};
