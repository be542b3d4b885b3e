pub mod blog_query;
pub mod blog_repository;
