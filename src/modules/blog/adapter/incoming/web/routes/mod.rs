mod create_blog;
mod delete_blog;
mod get_blog;
mod get_blogs;
mod get_public_blog;
mod patch_blog;

pub use create_blog::{create_blog_handler, CreateBlogRequest};
pub use delete_blog::delete_blog_handler;
pub use get_blog::get_blog_handler;
pub use get_blogs::{
    __path_get_public_blogs_handler, get_admin_blogs_handler, get_public_blogs_handler,
    GetBlogsQuery,
};
pub use get_public_blog::{__path_get_public_blog_handler, get_public_blog_handler};
pub use patch_blog::{patch_blog_handler, PatchBlogRequest};
