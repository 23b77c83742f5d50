pub mod blog;
pub mod errors;
