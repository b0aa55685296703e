//! Role-to-icon mapping.
//!
//! Pure presentation hint with no side effects; the UI maps the icon name to
//! whatever icon set it ships.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::user::Role;

/// Icon identifying the viewer's role in the dashboard header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoleIcon {
    GraduationCap,
    Book,
    TrendingUp,
    Home,
}

impl RoleIcon {
    /// Kebab-case icon name as the presentation layer expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleIcon::GraduationCap => "graduation-cap",
            RoleIcon::Book => "book",
            RoleIcon::TrendingUp => "trending-up",
            RoleIcon::Home => "home",
        }
    }
}

impl fmt::Display for RoleIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves the header icon for a role; `None` (no role selected yet) falls
/// back to the home icon.
pub fn role_icon(role: Option<Role>) -> RoleIcon {
    match role {
        Some(Role::Student) => RoleIcon::GraduationCap,
        Some(Role::Professor) => RoleIcon::Book,
        Some(Role::Investor) => RoleIcon::TrendingUp,
        None => RoleIcon::Home,
    }
}
