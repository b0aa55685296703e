//! DashboardOrchestrator - one seat of dashboard state per signed-in view.
//!
//! Owns the view-state machine and every entity collection for the current
//! dashboard. Constructed fresh after login and dropped at logout; nothing in
//! here is persisted. View navigation and collection mutation are deliberately
//! decoupled: switching sections or modals never resets loaded entities.
//!
//! Modal openers that carry an entity payload validate the id against the
//! owning collection first, so an open modal always points at a live entity.

use tracing::debug;

use crate::domain::dashboard::{role_icon, ActiveModal, RoleIcon, Section, ViewState};
use crate::domain::foundation::{PersonId, ProjectId};
use crate::domain::user::Role;

use super::feed::Feed;
use super::network::{
    Directory, DirectoryError, NotificationCenter, ProjectBoard, ProjectError, ResourceLibrary,
};

/// All per-dashboard state behind one handle.
#[derive(Debug, Default)]
pub struct DashboardOrchestrator {
    view: ViewState,
    feed: Feed,
    notifications: NotificationCenter,
    projects: ProjectBoard,
    resources: ResourceLibrary,
    directory: Directory,
}

impl DashboardOrchestrator {
    /// Starts on the home section with empty collections.
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // View state
    // ─────────────────────────────────────────────────────────────────────────

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn active_section(&self) -> Section {
        self.view.active_section()
    }

    pub fn active_modal(&self) -> Option<&ActiveModal> {
        self.view.active_modal()
    }

    pub fn select_section(&mut self, section: Section) {
        debug!(section = section.label(), "section selected");
        self.view.select_section(section);
    }

    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.view.open_modal(modal);
    }

    pub fn close_modal(&mut self) {
        self.view.close_modal();
    }

    /// Opens the project-details modal for an existing project.
    ///
    /// # Errors
    ///
    /// `ProjectError::NotFound` when the id matches nothing; the view is left
    /// unchanged.
    pub fn open_project_details(&mut self, project: ProjectId) -> Result<(), ProjectError> {
        if self.projects.get(&project).is_none() {
            return Err(ProjectError::NotFound(project));
        }
        self.view.open_modal(ActiveModal::ProjectDetails { project });
        Ok(())
    }

    /// Opens the profile modal for an existing directory member.
    ///
    /// # Errors
    ///
    /// `DirectoryError::PersonNotFound` when the id matches nothing; the view
    /// is left unchanged.
    pub fn open_user_profile(&mut self, person: PersonId) -> Result<(), DirectoryError> {
        if self.directory.get(&person).is_none() {
            return Err(DirectoryError::PersonNotFound(person));
        }
        self.view.open_modal(ActiveModal::UserProfile { person });
        Ok(())
    }

    /// Header icon for the signed-in role (home icon when no role yet).
    pub fn header_icon(&self, role: Option<Role>) -> RoleIcon {
        role_icon(role)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Collections
    // ─────────────────────────────────────────────────────────────────────────

    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    pub fn feed_mut(&mut self) -> &mut Feed {
        &mut self.feed
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn notifications_mut(&mut self) -> &mut NotificationCenter {
        &mut self.notifications
    }

    pub fn projects(&self) -> &ProjectBoard {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectBoard {
        &mut self.projects
    }

    pub fn resources(&self) -> &ResourceLibrary {
        &self.resources
    }

    pub fn resources_mut(&mut self) -> &mut ResourceLibrary {
        &mut self.resources
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }
}
