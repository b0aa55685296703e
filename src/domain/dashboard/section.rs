//! Dashboard sections.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The section the dashboard is currently showing. Exactly one is active at
/// any time; `None` renders the "select a section" placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    #[default]
    Home,
    Notifications,
    Analytics,
    Projects,
    Resources,
    Help,
    None,
}

impl Section {
    /// Sidebar label for the section.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Notifications => "Notifications",
            Section::Analytics => "Analytics",
            Section::Projects => "Projects",
            Section::Resources => "Resources",
            Section::Help => "Help",
            Section::None => "Select a section",
        }
    }

    /// Sections offered in the sidebar, in display order.
    pub const SIDEBAR: [Section; 6] = [
        Section::Home,
        Section::Notifications,
        Section::Analytics,
        Section::Projects,
        Section::Resources,
        Section::Help,
    ];
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
