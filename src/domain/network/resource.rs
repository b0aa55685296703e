//! Shared resource entity.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ResourceId, Timestamp};

/// Category of a shared resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Article,
    Video,
    Course,
    Tool,
}

/// A link shared in the resources section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    id: ResourceId,
    title: String,
    url: String,
    kind: ResourceKind,
    created_at: Timestamp,
}

impl Resource {
    pub fn new(title: impl Into<String>, url: impl Into<String>, kind: ResourceKind) -> Self {
        Self {
            id: ResourceId::new(),
            title: title.into(),
            url: url.into(),
            kind,
            created_at: Timestamp::now(),
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn kind(&self) -> ResourceKind {
        self.kind
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }
}
