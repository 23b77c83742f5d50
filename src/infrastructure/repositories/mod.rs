// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_blog;

pub use error::map_sqlx;
pub use postgres_blog::PostgresBlogRepository;
