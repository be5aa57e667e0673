//! Skill suggestions offered during intake.
//!
//! Suggestions come from two tables: skills typical of each preferred
//! domain, and skills matching the tier implied by the education level.

use super::{normalize_skill, Education, Profile};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Preferred domains and the skills each one suggests, in display order.
const DOMAIN_SKILLS: &[(&str, &[&str])] = &[
    (
        "tech",
        &["Programming", "Data Analysis", "AI/ML", "Web Development"],
    ),
    (
        "marketing",
        &[
            "Digital Marketing",
            "Content Creation",
            "Social Media",
            "Analytics",
        ],
    ),
    (
        "design",
        &[
            "UI/UX Design",
            "Graphic Design",
            "Prototyping",
            "Creative Thinking",
        ],
    ),
    (
        "business",
        &["Strategy", "Operations", "Leadership", "Project Management"],
    ),
    (
        "finance",
        &[
            "Financial Analysis",
            "Excel",
            "Accounting",
            "Risk Management",
        ],
    ),
    (
        "healthcare",
        &[
            "Medical Knowledge",
            "Patient Care",
            "Research",
            "Healthcare IT",
        ],
    ),
];

const BEGINNER_SKILLS: &[&str] = &[
    "Communication",
    "Teamwork",
    "Time Management",
    "Microsoft Office",
    "Basic Computer Skills",
];

const INTERMEDIATE_SKILLS: &[&str] = &[
    "Leadership",
    "Problem Solving",
    "Python",
    "Excel",
    "Project Management",
    "Research",
];

const ADVANCED_SKILLS: &[&str] = &[
    "Data Science",
    "Machine Learning",
    "Advanced Analytics",
    "Strategic Planning",
    "Mentoring",
];

/// Suggestion tier derived from education level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillTier {
    /// Foundational workplace skills.
    Beginner,
    /// Skills expected of a degree or diploma holder.
    Intermediate,
    /// Specialist skills.
    Advanced,
}

impl From<Education> for SkillTier {
    fn from(education: Education) -> Self {
        match education {
            Education::HighSchool => SkillTier::Beginner,
            Education::Diploma | Education::Undergraduate => SkillTier::Intermediate,
            Education::Postgraduate => SkillTier::Advanced,
        }
    }
}

/// Skills suggested for a preferred domain, or `None` for an unknown domain.
pub fn domain_skills(domain: &str) -> Option<&'static [&'static str]> {
    let key = normalize_skill(domain);
    DOMAIN_SKILLS
        .iter()
        .find(|(id, _)| *id == key)
        .map(|(_, skills)| *skills)
}

/// Skills suggested for a tier.
pub fn tier_skills(tier: SkillTier) -> &'static [&'static str] {
    match tier {
        SkillTier::Beginner => BEGINNER_SKILLS,
        SkillTier::Intermediate => INTERMEDIATE_SKILLS,
        SkillTier::Advanced => ADVANCED_SKILLS,
    }
}

/// Suggest skills the profile does not list yet.
///
/// Domain suggestions come first, in domain table order, followed by the
/// education tier's suggestions. Skills already on the profile and repeats
/// are dropped case-insensitively. Unknown domains contribute nothing.
pub fn suggest_skills(profile: &Profile) -> Vec<String> {
    let domain_suggestions = DOMAIN_SKILLS
        .iter()
        .filter(|(id, _)| profile.preferred_domains().contains(*id))
        .flat_map(|(_, skills)| skills.iter());
    let tier_suggestions = tier_skills(SkillTier::from(profile.education())).iter();

    let mut seen = BTreeSet::new();
    domain_suggestions
        .chain(tier_suggestions)
        .filter(|skill| !profile.has_skill(skill))
        .filter(|skill| seen.insert(normalize_skill(skill)))
        .map(|skill| skill.to_string())
        .collect()
}
