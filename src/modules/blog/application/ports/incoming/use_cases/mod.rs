mod create_blog;
mod delete_blog;
mod get_blog;
mod get_blogs;
mod get_public_blog;
mod patch_blog;

pub use create_blog::{CreateBlogCommand, CreateBlogError, CreateBlogUseCase};
pub use delete_blog::{DeleteBlogError, DeleteBlogUseCase};
pub use get_blog::{GetBlogError, GetBlogUseCase};
pub use get_blogs::{GetBlogsError, GetBlogsUseCase};
pub use get_public_blog::GetPublicBlogUseCase;
pub use patch_blog::{PatchBlogCommand, PatchBlogError, PatchBlogUseCase};
