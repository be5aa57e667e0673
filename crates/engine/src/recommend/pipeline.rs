//! Recommendation Pipeline: score, classify, recommend, rank.

use super::{
    courses, explainer, gap, signals, MatchResult, MatchScorer, RankedRecommendation, Scorer,
};
use crate::catalog::SkillCatalog;
use crate::error::{InvalidInput, Result};
use crate::opportunity::Opportunity;
use crate::profile::Profile;
use std::cmp::Ordering;
use std::collections::HashSet;

/// Rank every opportunity for a profile using [`MatchScorer`].
///
/// Pure function of its inputs: identical arguments give identical output.
/// An empty opportunity list yields an empty result; duplicate ids are
/// rejected.
pub fn generate(
    profile: &Profile,
    opportunities: &[Opportunity],
    catalog: &SkillCatalog,
) -> Result<Vec<RankedRecommendation>> {
    generate_with(&MatchScorer, profile, opportunities, catalog)
}

/// Rank every opportunity for a profile with the given scorer.
///
/// Ordering: score descending, then matched-skill count descending, then
/// opportunity id ascending. Ranks are assigned 1..=N after sorting.
pub fn generate_with<S: Scorer + ?Sized>(
    scorer: &S,
    profile: &Profile,
    opportunities: &[Opportunity],
    catalog: &SkillCatalog,
) -> Result<Vec<RankedRecommendation>> {
    check_unique_ids(opportunities)?;

    let mut recommendations = opportunities
        .iter()
        .map(|opportunity| {
            let result = scorer.score(profile, opportunity)?;
            Ok(assemble(profile, opportunity, result, catalog))
        })
        .collect::<Result<Vec<_>>>()?;

    recommendations.sort_by(compare);
    for (index, rec) in recommendations.iter_mut().enumerate() {
        rec.rank = index + 1;
    }

    tracing::debug!(
        opportunities = opportunities.len(),
        catalog = catalog.len(),
        top_score = recommendations.first().map(|r| r.score),
        "Generated recommendations"
    );

    Ok(recommendations)
}

fn check_unique_ids(opportunities: &[Opportunity]) -> Result<()> {
    let mut seen = HashSet::with_capacity(opportunities.len());
    for opportunity in opportunities {
        if !seen.insert(&opportunity.id) {
            return Err(InvalidInput::DuplicateOpportunityId {
                id: opportunity.id.to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn assemble(
    profile: &Profile,
    opportunity: &Opportunity,
    result: MatchResult,
    catalog: &SkillCatalog,
) -> RankedRecommendation {
    let analysis = gap::classify(&result.missing);
    let recommended_courses = courses::recommend(&result.missing, catalog);
    let fit_signals = signals::detect_fit_signals(profile, opportunity);
    let fit_summary = explainer::render_fit_summary(result.score, &fit_signals);

    RankedRecommendation {
        opportunity: opportunity.clone(),
        score: result.score,
        matched_skills: result.matched,
        missing_skills: result.missing,
        severity: analysis.severity,
        explanation: analysis.explanation,
        recommended_courses,
        rank: 0,
        fit_signals,
        fit_summary,
    }
}

fn compare(a: &RankedRecommendation, b: &RankedRecommendation) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.matched_skills.len().cmp(&a.matched_skills.len()))
        .then_with(|| a.opportunity.id.cmp(&b.opportunity.id))
}
