//! Dashboard view state: sections, modals, and presentation hints.

mod icon;
mod modal;
mod section;
mod view_state;

pub use icon::{role_icon, RoleIcon};
pub use modal::ActiveModal;
pub use section::Section;
pub use view_state::ViewState;
