pub mod auth;
pub mod documents;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;
pub mod users;

pub use auth::AuthService;
pub use documents::DocumentService;
pub use error::ClientError;
pub use http::ApiClient;
pub use session::{SessionStore, SESSION_KEY};
pub use storage::{MemoryStorage, SessionStorage};
#[cfg(feature = "browser")]
pub use storage::BrowserStorage;
pub use users::UserService;
