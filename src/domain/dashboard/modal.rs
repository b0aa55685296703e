//! Dashboard modals.
//!
//! "At most one modal, with its payload" is structural: the view state holds
//! an `Option<ActiveModal>`, and each variant carries the payload its dialog
//! needs. There is no way to represent two open modals, and no payload can
//! outlive the modal it belongs to.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{PersonId, ProjectId};

/// The modal currently overlaying the dashboard, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveModal {
    /// Another member's public profile card.
    UserProfile { person: PersonId },
    /// Enrolled courses (student).
    Courses,
    /// Course management (professor).
    ManageCourses,
    /// Investment portfolio (investor).
    Portfolio,
    /// Detail view for one project.
    ProjectDetails { project: ProjectId },
}
