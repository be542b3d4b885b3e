pub mod generate_blog_draft;
pub mod search_web;
