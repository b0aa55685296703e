//! Dashboard view-state machine.
//!
//! Pure view selection: transitions here never touch entity collections, so
//! switching sections or modals never resets or refetches loaded data.

use serde::{Deserialize, Serialize};

use super::{ActiveModal, Section};

/// Which section is visible and which modal (if any) overlays it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    active_section: Section,
    active_modal: Option<ActiveModal>,
}

impl ViewState {
    /// Starts on the home section with no modal.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn active_modal(&self) -> Option<&ActiveModal> {
        self.active_modal.as_ref()
    }

    /// Switches the visible section. Leaves any open modal alone.
    pub fn select_section(&mut self, section: Section) {
        self.active_section = section;
    }

    /// Opens a modal, implicitly closing any modal already open.
    pub fn open_modal(&mut self, modal: ActiveModal) {
        self.active_modal = Some(modal);
    }

    /// Closes the open modal, discarding its payload. No-op when none is open.
    pub fn close_modal(&mut self) {
        self.active_modal = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{PersonId, ProjectId};

    #[test]
    fn view_starts_on_home_with_no_modal() {
        let view = ViewState::new();
        assert_eq!(view.active_section(), Section::Home);
        assert!(view.active_modal().is_none());
    }

    #[test]
    fn select_section_does_not_touch_modal() {
        let mut view = ViewState::new();
        view.open_modal(ActiveModal::Courses);
        view.select_section(Section::Projects);

        assert_eq!(view.active_section(), Section::Projects);
        assert_eq!(view.active_modal(), Some(&ActiveModal::Courses));
    }

    #[test]
    fn opening_a_modal_replaces_the_previous_one() {
        let mut view = ViewState::new();
        view.open_modal(ActiveModal::Courses);
        view.open_modal(ActiveModal::Portfolio);

        assert_eq!(view.active_modal(), Some(&ActiveModal::Portfolio));
    }

    #[test]
    fn replacing_a_modal_discards_its_payload() {
        let mut view = ViewState::new();
        view.open_modal(ActiveModal::UserProfile {
            person: PersonId::new(),
        });
        let project = ProjectId::new();
        view.open_modal(ActiveModal::ProjectDetails { project });

        assert_eq!(
            view.active_modal(),
            Some(&ActiveModal::ProjectDetails { project })
        );
    }

    #[test]
    fn close_modal_is_idempotent() {
        let mut view = ViewState::new();
        view.open_modal(ActiveModal::ManageCourses);
        view.close_modal();
        view.close_modal();
        assert!(view.active_modal().is_none());
    }
}
