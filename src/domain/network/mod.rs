//! Entities rendered by the non-feed dashboard sections: notifications,
//! projects, resources, and the people directory.

mod notification;
mod person;
mod project;
mod resource;

pub use notification::{Notification, NotificationKind};
pub use person::Person;
pub use project::{Project, ProjectStatus};
pub use resource::{Resource, ResourceKind};
