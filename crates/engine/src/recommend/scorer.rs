//! Skill-overlap match scoring.

use super::MatchResult;
use crate::error::Result;
use crate::opportunity::Opportunity;
use crate::profile::{normalize_skill, Profile};

/// Score reported for an opportunity with no required skills.
pub const PERFECT_SCORE: u8 = 100;

/// Trait for computing match scores.
pub trait Scorer {
    /// Score one opportunity against a profile.
    fn score(&self, profile: &Profile, opportunity: &Opportunity) -> Result<MatchResult>;
}

/// Exact skill-name scorer.
///
/// Location, education and interests never affect the number; they are
/// reported separately as fit signals.
#[derive(Debug, Default, Clone, Copy)]
pub struct MatchScorer;

impl MatchScorer {
    /// Create a new scorer.
    pub fn new() -> Self {
        Self
    }
}

impl Scorer for MatchScorer {
    fn score(&self, profile: &Profile, opportunity: &Opportunity) -> Result<MatchResult> {
        score(profile, opportunity)
    }
}

/// Compare a profile's skills with an opportunity's required skills.
///
/// `matched` and `missing` keep the opportunity's order and spelling. The
/// score is `round(100 * matched / required)` with halves rounded up, or
/// [`PERFECT_SCORE`] when nothing is required.
pub fn score(profile: &Profile, opportunity: &Opportunity) -> Result<MatchResult> {
    opportunity.validate()?;

    let (matched, missing): (Vec<String>, Vec<String>) = opportunity
        .required_skills
        .iter()
        .cloned()
        .partition(|skill| profile.skills().contains(&normalize_skill(skill)));

    let result = MatchResult {
        score: percentage(matched.len(), opportunity.required_skills.len()),
        matched,
        missing,
    };

    tracing::trace!(
        opportunity = %opportunity.id,
        score = result.score,
        matched = result.matched.len(),
        missing = result.missing.len(),
        "Scored opportunity"
    );

    Ok(result)
}

/// Integer percentage of `part` over `whole`, rounding halves up.
fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return PERFECT_SCORE;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    // part <= whole, so rounded <= 100
    u8::try_from(rounded).unwrap_or(PERFECT_SCORE)
}
