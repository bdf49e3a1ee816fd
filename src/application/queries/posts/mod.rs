mod get;
mod list;
mod service;

pub use get::GetPostQuery;
pub use list::ListPostsQuery;
pub use service::PostQueryService;
