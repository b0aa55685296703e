//! Application services: the session state machine and the per-dashboard
//! orchestrator with its entity collections.

mod dashboard;
mod feed;
mod network;
mod session;

pub use dashboard::DashboardOrchestrator;
pub use feed::{Feed, FeedError};
pub use network::{
    Directory, DirectoryError, NotificationCenter, NotificationError, ProjectBoard, ProjectError,
    ResourceLibrary,
};
pub use session::SessionManager;
