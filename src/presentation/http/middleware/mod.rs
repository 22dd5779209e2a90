pub mod locale;
pub mod remote_user;

pub use locale::{ActiveLanguage, locale_middleware};
pub use remote_user::{RequestUser, remote_user_middleware};
