//! User identity, roles, and role-tagged profiles.

mod account;
mod errors;
mod profile;
mod role;

pub use account::{ImageKind, UserAccount, DEFAULT_PLACEHOLDER_IMAGE};
pub use errors::AuthError;
pub use profile::{
    InvalidProfileUpdate, InvestorProfile, ProfessorProfile, Profile, ProfileFields,
    StudentProfile,
};
pub use role::{Role, UnknownRole};
