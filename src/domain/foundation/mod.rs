//! Foundation value objects shared across the domain.

mod ids;
mod timestamp;

pub use ids::{
    CommentId, NotificationId, PersonId, PostId, ProjectId, ReplyId, ResourceId, UserId,
};
pub use timestamp::Timestamp;
