pub mod auth;
pub mod posts;
pub mod users;

pub use auth::{AuthTokenDto, AuthenticatedUser, LoginDto, TokenSubject};
pub use posts::{CreatorDto, PostDto, PostPageDto};
pub use users::UserDto;
