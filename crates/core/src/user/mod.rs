//! User accounts and the registry.

pub mod error;
pub mod registry;
pub mod types;

pub use error::UserError;
pub use registry::{UserRegistry, UserStore};
pub use types::{NewUser, NewUserRecord, User};
