mod generate_blog;
mod search;

pub use generate_blog::{generate_blog_handler, GenerateBlogRequest};
pub use search::{search_handler, SearchRequest};
