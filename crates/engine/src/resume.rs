//! Resume focus for a chosen recommendation.

use crate::profile::{normalize_skill, Profile};
use crate::recommend::RankedRecommendation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// What a tailored resume should lead with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFocus {
    /// One-line headline naming the target opportunity.
    pub headline: String,
    /// Matched skills first, then the rest of the profile's skills.
    pub skills: Vec<String>,
}

/// Order a profile's skills for an opportunity.
pub fn resume_focus(profile: &Profile, recommendation: &RankedRecommendation) -> ResumeFocus {
    let matched: HashSet<String> = recommendation
        .matched_skills
        .iter()
        .map(|s| normalize_skill(s))
        .collect();

    let skills = recommendation
        .matched_skills
        .iter()
        .cloned()
        .chain(
            profile
                .skills()
                .iter()
                .filter(|skill| !matched.contains(*skill))
                .cloned(),
        )
        .collect();

    let opportunity = &recommendation.opportunity;
    let target = if opportunity.organization.is_empty() {
        opportunity.title.clone()
    } else {
        format!("{} at {}", opportunity.title, opportunity.organization)
    };
    let headline = format!(
        "{} - {} of {} required skills",
        target,
        recommendation.matched_skills.len(),
        opportunity.required_skills.len()
    );

    ResumeFocus { headline, skills }
}
