pub mod category;
pub mod stream;
pub mod user;

pub use category::Category;
pub use stream::{CreateStreamRequest, Stream, StreamCategory, UpdateStreamRequest};
pub use user::{LoginCredentials, RegisterRequest, User};
