//! `SeaORM` entity definitions.

pub mod entries;
pub mod users;
