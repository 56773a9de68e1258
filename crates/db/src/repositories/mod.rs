//! Repository implementations of the core's storage traits.
//!
//! Repositories hide the `SeaORM` details from the rest of the
//! application: the core only sees its `EntryStore`/`UserStore` traits.

pub mod entry;
pub mod user;

pub use entry::EntryRepository;
pub use user::UserRepository;
