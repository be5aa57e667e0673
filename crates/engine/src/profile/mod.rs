//! User profile model, intake normalization and skill suggestions.

pub mod intake;
pub mod suggest;

pub use intake::{FieldList, ProfileInput};
pub use suggest::{domain_skills, suggest_skills, tier_skills, SkillTier};

use crate::error::{EngineError, InvalidInput};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Normalize a skill (or interest, or domain) name for comparison.
///
/// Trims surrounding whitespace and lower-cases. Every set-membership test
/// in the engine goes through this function.
pub fn normalize_skill(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Highest education level reached (or being pursued).
///
/// Variants are declared in ascending order so `Ord` follows the level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Education {
    /// 12th grade or equivalent.
    HighSchool,
    /// Diploma or professional certificate.
    Diploma,
    /// Bachelor's degree.
    Undergraduate,
    /// Master's degree.
    Postgraduate,
}

impl Education {
    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::HighSchool => "high_school",
            Self::Diploma => "diploma",
            Self::Undergraduate => "undergraduate",
            Self::Postgraduate => "postgraduate",
        }
    }

    /// Human-readable name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::HighSchool => "High School",
            Self::Diploma => "Diploma/Certificate",
            Self::Undergraduate => "Bachelor's Degree",
            Self::Postgraduate => "Master's Degree",
        }
    }
}

impl FromStr for Education {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_skill(s).as_str() {
            "high_school" => Ok(Self::HighSchool),
            "diploma" => Ok(Self::Diploma),
            "undergraduate" => Ok(Self::Undergraduate),
            "postgraduate" => Ok(Self::Postgraduate),
            _ => Err(InvalidInput::UnknownLabel {
                kind: "education level",
                label: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Self-reported work experience bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    /// No prior experience.
    #[serde(rename = "fresher")]
    Fresher,
    /// Up to one year.
    #[serde(rename = "0-1")]
    UpToOneYear,
    /// One to two years.
    #[serde(rename = "1-2")]
    OneToTwoYears,
    /// More than two years.
    #[serde(rename = "2+")]
    OverTwoYears,
}

impl ExperienceLevel {
    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fresher => "fresher",
            Self::UpToOneYear => "0-1",
            Self::OneToTwoYears => "1-2",
            Self::OverTwoYears => "2+",
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fresher" => Ok(Self::Fresher),
            "0-1" => Ok(Self::UpToOneYear),
            "1-2" => Ok(Self::OneToTwoYears),
            "2+" => Ok(Self::OverTwoYears),
            _ => Err(InvalidInput::UnknownLabel {
                kind: "experience level",
                label: s.to_string(),
            }
            .into()),
        }
    }
}

/// Normalized representation of a user's skills, education, interests and location.
///
/// Skill, interest and domain sets are always normalized (see [`normalize_skill`])
/// and never absent; building a profile from missing input yields empty sets.
/// A profile is immutable for the duration of one recommendation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    name: String,
    skills: BTreeSet<String>,
    education: Education,
    interests: BTreeSet<String>,
    location: String,
    experience_level: Option<ExperienceLevel>,
    preferred_domains: BTreeSet<String>,
}

impl Profile {
    /// Create a profile with no skills, interests or domains.
    pub fn new(name: impl Into<String>, education: Education) -> Self {
        Self {
            name: name.into().trim().to_string(),
            skills: BTreeSet::new(),
            education,
            interests: BTreeSet::new(),
            location: String::new(),
            experience_level: None,
            preferred_domains: BTreeSet::new(),
        }
    }

    /// Add skills, normalizing and deduplicating them. Blank names are dropped.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.skills, skills);
        self
    }

    /// Add interests, normalizing and deduplicating them.
    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.interests, interests);
        self
    }

    /// Add preferred domains, normalizing and deduplicating them.
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        extend_normalized(&mut self.preferred_domains, domains);
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into().trim().to_string();
        self
    }

    /// Set the experience bracket.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized skill set.
    pub fn skills(&self) -> &BTreeSet<String> {
        &self.skills
    }

    /// Education level.
    pub fn education(&self) -> Education {
        self.education
    }

    /// Normalized interest set.
    pub fn interests(&self) -> &BTreeSet<String> {
        &self.interests
    }

    /// Free-text location as entered.
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Experience bracket, if given.
    pub fn experience_level(&self) -> Option<ExperienceLevel> {
        self.experience_level
    }

    /// Normalized preferred domain set.
    pub fn preferred_domains(&self) -> &BTreeSet<String> {
        &self.preferred_domains
    }

    /// Case-insensitive skill membership.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(&normalize_skill(skill))
    }
}

fn extend_normalized<I, S>(set: &mut BTreeSet<String>, items: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    set.extend(
        items
            .into_iter()
            .map(|s| normalize_skill(s.as_ref()))
            .filter(|s| !s.is_empty()),
    );
}
