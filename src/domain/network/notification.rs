//! Notification entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{NotificationId, Timestamp};

/// What kind of activity a notification announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Like,
    Comment,
    Connection,
    System,
}

/// A single dashboard notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    id: NotificationId,
    title: String,
    body: String,
    kind: NotificationKind,
    read: bool,
    created_at: Timestamp,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            title: title.into(),
            body: body.into(),
            kind,
            read: false,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &NotificationId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Marks the notification as read. Idempotent.
    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
