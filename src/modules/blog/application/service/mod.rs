mod create_blog_service;
mod delete_blog_service;
mod get_blog_service;
mod get_blogs_service;
mod get_public_blog_service;
mod patch_blog_service;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_blog_service::CreateBlogService;
pub use delete_blog_service::DeleteBlogService;
pub use get_blog_service::GetBlogService;
pub use get_blogs_service::GetBlogsService;
pub use get_public_blog_service::GetPublicBlogService;
pub use patch_blog_service::PatchBlogService;
