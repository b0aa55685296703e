//! Ports - interfaces the application layer depends on.

mod user_store;

pub use user_store::{UserStore, UserStoreError};
