//! Feed entities.

mod post;

pub use post::{Comment, Post, Reply};
