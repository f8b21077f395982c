pub mod access;
pub mod document;
pub mod user;
pub mod validation;

pub use access::*;
pub use document::*;
pub use user::*;
pub use validation::*;
