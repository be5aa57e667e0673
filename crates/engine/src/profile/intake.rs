//! Normalization of raw intake payloads into a [`Profile`].
//!
//! The intake wizard (and voice capture) deliver free text: skills and
//! interests typed into a single box as a comma-separated string, or as a
//! list when the form has already split them. Both shapes are accepted.

use super::{Education, ExperienceLevel, Profile};
use crate::error::{InvalidInput, Result};
use serde::{Deserialize, Serialize};

/// A list field that may arrive as one comma-separated string or as items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldList {
    /// `"React, CSS, Node.js"`
    Text(String),
    /// `["React", "CSS", "Node.js"]`
    Items(Vec<String>),
}

impl FieldList {
    /// Split into trimmed, non-empty entries.
    pub fn entries(&self) -> Vec<String> {
        let raw: Vec<&str> = match self {
            FieldList::Text(text) => text.split(',').collect(),
            FieldList::Items(items) => items.iter().map(String::as_str).collect(),
        };
        raw.into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    }
}

impl Default for FieldList {
    fn default() -> Self {
        FieldList::Items(Vec::new())
    }
}

/// Raw profile as captured by the intake collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInput {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Skills, list or comma-separated.
    #[serde(default)]
    pub skills: Option<FieldList>,
    /// Education label (`high_school`, `undergraduate`, `postgraduate`, `diploma`).
    #[serde(default)]
    pub education: Option<String>,
    /// Interests, list or comma-separated.
    #[serde(default)]
    pub interests: Option<FieldList>,
    /// Free-text location.
    #[serde(default)]
    pub location: Option<String>,
    /// Experience label (`fresher`, `0-1`, `1-2`, `2+`); empty means absent.
    #[serde(default)]
    pub experience: Option<String>,
    /// Preferred domain ids (`tech`, `design`, ...).
    #[serde(default)]
    pub domains: Option<FieldList>,
}

impl Profile {
    /// Build a normalized profile from raw intake input.
    ///
    /// Absent skills, interests and domains become empty sets. Education is
    /// required; an unknown education or experience label is rejected.
    pub fn from_input(input: ProfileInput) -> Result<Profile> {
        let education = match input.education.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.parse::<Education>()?,
            _ => return Err(InvalidInput::MissingField { field: "education" }.into()),
        };

        let mut profile = Profile::new(input.name, education)
            .with_skills(input.skills.unwrap_or_default().entries())
            .with_interests(input.interests.unwrap_or_default().entries())
            .with_domains(input.domains.unwrap_or_default().entries())
            .with_location(input.location.unwrap_or_default());

        if let Some(label) = input.experience.as_deref().map(str::trim) {
            if !label.is_empty() {
                profile = profile.with_experience(label.parse::<ExperienceLevel>()?);
            }
        }

        tracing::trace!(
            skills = profile.skills().len(),
            interests = profile.interests().len(),
            "Normalized intake profile"
        );

        Ok(profile)
    }
}
