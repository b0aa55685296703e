//! People directory entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PersonId;
use crate::domain::user::Role;

/// Another platform member the viewer can connect with. Directory entries
/// are other people's public cards, not full accounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: PersonId,
    name: String,
    role: Role,
    connected: bool,
}

impl Person {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            id: PersonId::new(),
            name: name.into(),
            role,
            connected: false,
        }
    }

    pub fn id(&self) -> &PersonId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Connects or disconnects from this person. Toggling, like post likes.
    pub fn toggle_connection(&mut self) {
        self.connected = !self.connected;
    }
}
