//! CLI handler for the `recommend` command.

use crate::cli::OutputFormat;
use crate::data::{load_catalog, load_opportunities, load_profile};
use anyhow::Result;
use internpath_engine::{generate, RankedRecommendation};
use internpath_state::{load_session, SessionState};
use std::fmt::Write as _;
use std::path::PathBuf;

/// Handle the `recommend` command.
pub(crate) fn handle_recommend_command(
    profile: PathBuf,
    opportunities: PathBuf,
    catalog: Option<PathBuf>,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<()> {
    let profile = load_profile(&profile)?;
    let opportunities = load_opportunities(&opportunities)?;
    let catalog = load_catalog(catalog.as_deref())?;

    let mut recommendations = generate(&profile, &opportunities, &catalog)?;
    let total_found = recommendations.len();
    if let Some(limit) = limit {
        recommendations.truncate(limit);
    }

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&recommendations)?);
        return Ok(());
    }

    let session = load_session()?;
    print!(
        "{}",
        render_recommendations(profile.name(), &recommendations, total_found, &session)
    );
    Ok(())
}

/// Render recommendations in human-readable format.
pub(crate) fn render_recommendations(
    name: &str,
    recommendations: &[RankedRecommendation],
    total_found: usize,
    session: &SessionState,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Internship Recommendations");
    let _ = writeln!(out, "==========================\n");
    if !name.is_empty() {
        let _ = writeln!(out, "Profile: {}", name);
    }
    let _ = writeln!(
        out,
        "Found: {} opportunities (showing {})\n",
        total_found,
        recommendations.len()
    );

    if recommendations.is_empty() {
        let _ = writeln!(out, "No opportunities to rank.");
        return out;
    }

    for rec in recommendations {
        let opportunity = &rec.opportunity;
        let saved = if session.is_saved(opportunity.id.as_str()) {
            " [saved]"
        } else {
            ""
        };
        let _ = write!(out, "#{} {}", rec.rank, opportunity.title);
        if !opportunity.organization.is_empty() {
            let _ = write!(out, " at {}", opportunity.organization);
        }
        let _ = writeln!(out, " (id {}){}", opportunity.id, saved);
        let _ = writeln!(out, "   {}", rec.fit_summary);

        let mut terms = Vec::new();
        if !opportunity.location.is_empty() {
            terms.push(opportunity.location.clone());
        }
        if !opportunity.stipend.is_empty() {
            terms.push(opportunity.stipend.clone());
        }
        if !opportunity.duration.is_empty() {
            terms.push(opportunity.duration.clone());
        }
        if let Some(deadline) = opportunity.deadline {
            terms.push(format!("apply by {}", deadline.format("%Y-%m-%d")));
        }
        if !terms.is_empty() {
            let _ = writeln!(out, "   {}", terms.join(" | "));
        }

        if !rec.matched_skills.is_empty() {
            let _ = writeln!(out, "   Matched: {}", rec.matched_skills.join(", "));
        }
        let _ = writeln!(out, "   Gap: {} - {}", rec.severity, rec.explanation);
        if !rec.missing_skills.is_empty() {
            let _ = writeln!(out, "   Missing: {}", rec.missing_skills.join(", "));
        }
        for course in &rec.recommended_courses {
            let status = if session.is_completed(&course.skill) {
                " [completed]"
            } else if session.is_enrolled(&course.skill) {
                " [enrolled]"
            } else {
                ""
            };
            let _ = writeln!(
                out,
                "     - {}: {} ({}, {} weeks, {}, {:.1}/5){}",
                course.skill,
                course.course.title,
                course.course.provider,
                course.course.duration_weeks,
                course.course.difficulty,
                course.course.rating,
                status
            );
        }
        let uncovered: Vec<&str> = rec.skills_without_course().collect();
        if !uncovered.is_empty() {
            let _ = writeln!(out, "     No course available: {}", uncovered.join(", "));
        }
        out.push('\n');
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use internpath_engine::SkillCatalog;
    use internpath_test_utils::{opportunity, sample_profile};

    fn sample() -> Vec<RankedRecommendation> {
        let opportunities = vec![
            opportunity("1", &["React", "CSS"]),
            opportunity("2", &["Rust", "Go"]),
        ];
        generate(&sample_profile(), &opportunities, SkillCatalog::builtin()).unwrap()
    }

    #[test]
    fn renders_rank_gap_and_courses() {
        let out = render_recommendations("Priya", &sample(), 2, &SessionState::default());

        assert!(out.contains("Profile: Priya"));
        assert!(out.contains("#1 Role 1 (id 1)"));
        assert!(out.contains("Gap: low - Minor skill gaps - easy to bridge!"));
        assert!(out.contains("- CSS: Advanced CSS and Responsive Design (NPTEL, 4 weeks, Beginner, 4.6/5)"));
        assert!(out.contains("No course available: Rust, Go"));
    }

    #[test]
    fn marks_saved_and_enrolled() {
        let mut session = SessionState::default();
        session.toggle_saved("1");
        session.enroll("css");

        let out = render_recommendations("", &sample(), 2, &session);
        assert!(out.contains("(id 1) [saved]"));
        assert!(out.contains("4.6/5) [enrolled]"));
        assert!(!out.contains("(id 2) [saved]"));
    }

    #[test]
    fn empty_result_message() {
        let out = render_recommendations("", &[], 0, &SessionState::default());
        assert!(out.contains("No opportunities to rank."));
    }
}
