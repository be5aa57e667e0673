//! Recommendation & Skill-Gap Engine.
//!
//! One [`Profile`](crate::profile::Profile) against N opportunities yields N
//! [`RankedRecommendation`]s: each opportunity is scored, its missing skills
//! classified and mapped to courses, and the records ranked.

pub mod courses;
mod explainer;
pub mod gap;
mod pipeline;
mod scorer;
mod signals;

pub use courses::{group_by_category, recommend, CourseRecommendation};
pub use explainer::{render_digest, render_fit_summary};
pub use gap::{classify, severity_for_count, GapAnalysis, Severity};
pub use pipeline::{generate, generate_with};
pub use scorer::{score, MatchScorer, Scorer, PERFECT_SCORE};
pub use signals::detect_fit_signals;

use crate::opportunity::Opportunity;
use crate::profile::Education;
use serde::{Deserialize, Serialize};

/// Output of the match scorer for one opportunity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Percentage in `[0, 100]`.
    pub score: u8,
    /// Required skills the profile has, in required order.
    pub matched: Vec<String>,
    /// Required skills the profile lacks, in required order.
    pub missing: Vec<String>,
}

/// Qualitative fit beyond skills. Explanation only: never scored or ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FitSignal {
    /// The opportunity is where the user is, or is remote.
    LocationFit {
        /// The matching location (the user's, or `Remote`).
        location: String,
    },
    /// The user meets the opportunity's education requirement.
    EducationMatch {
        /// The user's education level.
        education: Education,
    },
    /// User interests or domains mentioned by the opportunity.
    InterestMatch {
        /// Matched interests, normalized.
        interests: Vec<String>,
    },
}

impl FitSignal {
    /// Get a short label for this signal.
    pub fn label(&self) -> &'static str {
        match self {
            Self::LocationFit { .. } => "location-fit",
            Self::EducationMatch { .. } => "education-match",
            Self::InterestMatch { .. } => "interest-match",
        }
    }
}

/// Engine output for one opportunity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRecommendation {
    /// The scored opportunity.
    pub opportunity: Opportunity,
    /// Skill match percentage in `[0, 100]`.
    pub score: u8,
    /// Required skills the profile has.
    pub matched_skills: Vec<String>,
    /// Required skills the profile lacks.
    pub missing_skills: Vec<String>,
    /// Gap severity tier.
    pub severity: Severity,
    /// Explanation for the severity tier.
    pub explanation: String,
    /// Courses for missing skills the catalog knows, in missing order.
    pub recommended_courses: Vec<CourseRecommendation>,
    /// Position in the result set, starting at 1.
    pub rank: usize,
    /// Qualitative fit signals.
    #[serde(default)]
    pub fit_signals: Vec<FitSignal>,
    /// Score and fit signals as one line of text.
    #[serde(default)]
    pub fit_summary: String,
}

impl RankedRecommendation {
    /// Missing skills with no course in the catalog.
    pub fn skills_without_course(&self) -> impl Iterator<Item = &str> {
        self.missing_skills
            .iter()
            .map(String::as_str)
            .filter(|skill| !self.recommended_courses.iter().any(|c| c.skill == *skill))
    }
}
