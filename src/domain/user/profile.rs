//! Role-tagged profile variants.
//!
//! A profile's shape is determined by the owner's [`Role`]: the variant tag
//! always matches the role it was created for. Construction goes through
//! [`Profile::empty_for`], so adding a role is one new variant plus one
//! factory branch.
//!
//! Each variant carries a flattened `extra` map: field keys the schema does
//! not know about survive deserialize -> merge -> serialize unchanged. The
//! presentation layer's forms own schema enforcement, not this type.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Role;

/// String-keyed partial profile update, shallow-merged over the current
/// profile. The `type` tag is protected and cannot be changed by a merge.
pub type ProfileFields = Map<String, Value>;

/// A merge produced a value that no longer parses as a valid profile
/// (for example a known field given the wrong type). The profile is left
/// unchanged.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Profile update rejected: {0}")]
pub struct InvalidProfileUpdate(String);

/// Profile fields for a student.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub graduation_year: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
    /// Keys the schema does not know about, preserved as-is.
    #[serde(flatten)]
    pub extra: ProfileFields,
}

/// Profile fields for a professor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfessorProfile {
    #[serde(default)]
    pub university: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub publications: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
    /// Keys the schema does not know about, preserved as-is.
    #[serde(flatten)]
    pub extra: ProfileFields,
}

/// Profile fields for an investor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvestorProfile {
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub investment_focus: String,
    #[serde(default)]
    pub portfolio_size: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub portfolio: String,
    /// Keys the schema does not know about, preserved as-is.
    #[serde(flatten)]
    pub extra: ProfileFields,
}

/// Role-tagged profile sum type.
///
/// Serialized with a `type` tag matching [`Role::as_str`], so stored records
/// look like `{"type": "student", "university": "...", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Profile {
    Student(StudentProfile),
    Professor(ProfessorProfile),
    Investor(InvestorProfile),
}

impl Profile {
    /// Factory: an empty profile for the given role tag.
    pub fn empty_for(role: Role) -> Self {
        match role {
            Role::Student => Profile::Student(StudentProfile::default()),
            Role::Professor => Profile::Professor(ProfessorProfile::default()),
            Role::Investor => Profile::Investor(InvestorProfile::default()),
        }
    }

    /// The role this profile's variant tag corresponds to.
    pub fn role(&self) -> Role {
        match self {
            Profile::Student(_) => Role::Student,
            Profile::Professor(_) => Role::Professor,
            Profile::Investor(_) => Role::Investor,
        }
    }

    /// Shallow-merges `fields` over this profile and returns the result.
    ///
    /// Unknown keys land in the variant's `extra` map. The `type` tag is
    /// skipped if present in `fields`. The merge is all-or-nothing: if the
    /// merged value no longer parses as this variant (a known field given an
    /// incompatible type), an error is returned and `self` is untouched.
    pub fn merge(&self, fields: &ProfileFields) -> Result<Profile, InvalidProfileUpdate> {
        let mut value = serde_json::to_value(self)
            .map_err(|e| InvalidProfileUpdate(e.to_string()))?;

        let object = value
            .as_object_mut()
            .ok_or_else(|| InvalidProfileUpdate("profile is not an object".to_string()))?;

        for (key, field) in fields {
            if key == "type" {
                continue;
            }
            object.insert(key.clone(), field.clone());
        }

        let merged: Profile =
            serde_json::from_value(value).map_err(|e| InvalidProfileUpdate(e.to_string()))?;

        // A merge may never move the profile to a different tag.
        debug_assert_eq!(merged.role(), self.role());
        Ok(merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, Value)]) -> ProfileFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn empty_for_matches_role_tag() {
        for role in Role::ALL {
            assert_eq!(Profile::empty_for(role).role(), role);
        }
    }

    #[test]
    fn empty_student_profile_has_blank_fields() {
        let profile = Profile::empty_for(Role::Student);
        match profile {
            Profile::Student(p) => {
                assert_eq!(p.university, "");
                assert_eq!(p.skills, "");
                assert!(p.extra.is_empty());
            }
            other => panic!("expected student profile, got {:?}", other),
        }
    }

    #[test]
    fn serialized_profile_carries_type_tag() {
        let profile = Profile::empty_for(Role::Investor);
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["type"], "investor");
    }

    #[test]
    fn merge_updates_known_field() {
        let profile = Profile::empty_for(Role::Student);
        let merged = profile
            .merge(&fields(&[("university", json!("MIT"))]))
            .unwrap();

        match merged {
            Profile::Student(p) => assert_eq!(p.university, "MIT"),
            other => panic!("expected student profile, got {:?}", other),
        }
    }

    #[test]
    fn merge_preserves_unmentioned_fields() {
        let base = Profile::empty_for(Role::Professor)
            .merge(&fields(&[("department", json!("Physics"))]))
            .unwrap();
        let merged = base.merge(&fields(&[("bio", json!("Hi"))])).unwrap();

        match merged {
            Profile::Professor(p) => {
                assert_eq!(p.department, "Physics");
                assert_eq!(p.bio, "Hi");
            }
            other => panic!("expected professor profile, got {:?}", other),
        }
    }

    #[test]
    fn merge_keeps_unknown_keys() {
        let profile = Profile::empty_for(Role::Student);
        let merged = profile
            .merge(&fields(&[("github", json!("octocat"))]))
            .unwrap();

        match &merged {
            Profile::Student(p) => assert_eq!(p.extra["github"], json!("octocat")),
            other => panic!("expected student profile, got {:?}", other),
        }

        // Unknown keys survive a full serialize/deserialize cycle too.
        let json = serde_json::to_string(&merged).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, merged);
    }

    #[test]
    fn merge_cannot_change_type_tag() {
        let profile = Profile::empty_for(Role::Student);
        let merged = profile.merge(&fields(&[("type", json!("investor"))])).unwrap();
        assert_eq!(merged.role(), Role::Student);
    }

    #[test]
    fn merge_rejects_incompatible_known_field() {
        let profile = Profile::empty_for(Role::Professor);
        let result = profile.merge(&fields(&[("publications", json!("not-a-number"))]));
        assert!(result.is_err());
    }

    #[test]
    fn stored_record_with_unknown_keys_deserializes() {
        let json = r#"{"type":"investor","company":"Acme","fund_stage":"seed"}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();

        match &profile {
            Profile::Investor(p) => {
                assert_eq!(p.company, "Acme");
                assert_eq!(p.extra["fund_stage"], "seed");
            }
            other => panic!("expected investor profile, got {:?}", other),
        }
    }
}
