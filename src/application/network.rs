//! Network collections: notifications, projects, resources, and the people
//! directory.
//!
//! Same contract as the feed: in-memory, synchronous, typed not-found errors,
//! failed lookups mutate nothing.

use thiserror::Error;
use tracing::debug;

use crate::domain::foundation::{NotificationId, PersonId, ProjectId};
use crate::domain::network::{
    Notification, NotificationKind, Person, Project, ProjectStatus, Resource, ResourceKind,
};
use crate::domain::user::Role;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotificationError {
    #[error("Notification not found: {0}")]
    NotFound(NotificationId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(ProjectId),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Person not found: {0}")]
    PersonNotFound(PersonId),
}

/// Notifications in arrival order.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.is_read()).count()
    }

    pub fn push(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
    ) -> &Notification {
        self.items.push(Notification::new(title, body, kind));
        self.items.last().expect("notification was just pushed")
    }

    /// # Errors
    ///
    /// `NotificationError::NotFound` when the id matches nothing.
    pub fn mark_read(&mut self, id: &NotificationId) -> Result<(), NotificationError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or(NotificationError::NotFound(*id))?;
        item.mark_read();
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.mark_read();
        }
    }
}

/// Projects in creation order.
#[derive(Debug, Default)]
pub struct ProjectBoard {
    projects: Vec<Project>,
}

impl ProjectBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    pub fn create(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &Project {
        let project = Project::new(name, description);
        debug!(project_id = %project.id(), "project created");
        self.projects.push(project);
        self.projects.last().expect("project was just pushed")
    }

    /// # Errors
    ///
    /// `ProjectError::NotFound` when the id matches nothing.
    pub fn set_status(
        &mut self,
        id: &ProjectId,
        status: ProjectStatus,
    ) -> Result<&Project, ProjectError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(ProjectError::NotFound(*id))?;
        project.set_status(status);
        Ok(&*project)
    }
}

/// Shared links in creation order.
#[derive(Debug, Default)]
pub struct ResourceLibrary {
    resources: Vec<Resource>,
}

impl ResourceLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Resource] {
        &self.resources
    }

    pub fn add(
        &mut self,
        title: impl Into<String>,
        url: impl Into<String>,
        kind: ResourceKind,
    ) -> &Resource {
        self.resources.push(Resource::new(title, url, kind));
        self.resources.last().expect("resource was just pushed")
    }
}

/// The people the viewer can browse and connect with.
#[derive(Debug, Default)]
pub struct Directory {
    people: Vec<Person>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list(&self) -> &[Person] {
        &self.people
    }

    pub fn get(&self, id: &PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id() == id)
    }

    pub fn add(&mut self, name: impl Into<String>, role: Role) -> &Person {
        self.people.push(Person::new(name, role));
        self.people.last().expect("person was just pushed")
    }

    /// # Errors
    ///
    /// `DirectoryError::PersonNotFound` when the id matches nothing.
    pub fn toggle_connection(&mut self, id: &PersonId) -> Result<&Person, DirectoryError> {
        let person = self
            .people
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(DirectoryError::PersonNotFound(*id))?;
        person.toggle_connection();
        Ok(&*person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unread_count_tracks_mark_read() {
        let mut center = NotificationCenter::new();
        let id = *center
            .push("New like", "alice liked your post", NotificationKind::Like)
            .id();
        center.push("Welcome", "Hello", NotificationKind::System);
        assert_eq!(center.unread_count(), 2);

        center.mark_read(&id).unwrap();
        assert_eq!(center.unread_count(), 1);

        center.mark_all_read();
        assert_eq!(center.unread_count(), 0);
    }

    #[test]
    fn mark_read_on_missing_notification_fails() {
        let mut center = NotificationCenter::new();
        let missing = NotificationId::new();
        assert_eq!(
            center.mark_read(&missing),
            Err(NotificationError::NotFound(missing))
        );
    }

    #[test]
    fn project_status_update_targets_the_addressed_project() {
        let mut board = ProjectBoard::new();
        let first = *board.create("Portal", "Shared portal").id();
        let second = *board.create("Mentoring", "Mentor matching").id();

        board.set_status(&first, ProjectStatus::Active).unwrap();

        assert_eq!(board.get(&first).unwrap().status(), ProjectStatus::Active);
        assert_eq!(board.get(&second).unwrap().status(), ProjectStatus::Planning);
    }

    #[test]
    fn set_status_on_missing_project_fails() {
        let mut board = ProjectBoard::new();
        let missing = ProjectId::new();
        assert_eq!(
            board.set_status(&missing, ProjectStatus::Completed),
            Err(ProjectError::NotFound(missing))
        );
    }

    #[test]
    fn resources_keep_creation_order() {
        let mut library = ResourceLibrary::new();
        library.add("Intro", "https://example.com/a", ResourceKind::Article);
        library.add("Deep dive", "https://example.com/b", ResourceKind::Video);

        let titles: Vec<&str> = library.list().iter().map(|r| r.title()).collect();
        assert_eq!(titles, vec!["Intro", "Deep dive"]);
    }

    #[test]
    fn connection_toggle_flips_only_the_addressed_person() {
        let mut directory = Directory::new();
        let chen = *directory.add("Dr. Chen", Role::Professor).id();
        let kim = *directory.add("Kim", Role::Student).id();

        directory.toggle_connection(&chen).unwrap();

        assert!(directory.get(&chen).unwrap().is_connected());
        assert!(!directory.get(&kim).unwrap().is_connected());
    }

    #[test]
    fn toggle_connection_on_missing_person_fails() {
        let mut directory = Directory::new();
        let missing = PersonId::new();
        assert_eq!(
            directory.toggle_connection(&missing),
            Err(DirectoryError::PersonNotFound(missing))
        );
    }
}
