//! Platform roles.
//!
//! A role determines which profile shape applies and which dashboard
//! sections and modals are relevant. The set is closed: adding a role means
//! a new variant here plus one branch in `Profile::empty_for`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed set of user categories on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Student,
    Professor,
    Investor,
}

impl Role {
    /// All roles, in selection-screen order.
    pub const ALL: [Role; 3] = [Role::Student, Role::Professor, Role::Investor];

    /// Stable string tag used in serialized records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Professor => "professor",
            Role::Investor => "investor",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown role tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Role::Student),
            "professor" => Ok(Role::Professor),
            "investor" => Ok(Role::Investor),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}
