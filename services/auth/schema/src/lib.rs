//! sea-orm entities for the auth database.

pub mod users;
