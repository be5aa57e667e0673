//! CLI handlers for the profile-facing `digest`, `suggest` and `resume` commands.

use crate::cli::OutputFormat;
use crate::data::{load_catalog, load_opportunities, load_profile};
use anyhow::{anyhow, Result};
use internpath_engine::{
    generate, render_digest, resume_focus, suggest_skills, RankedRecommendation, ResumeFocus,
};
use internpath_state::env_digest_top_n;
use std::path::PathBuf;

/// Handle the `digest` command.
pub(crate) fn handle_digest_command(
    profile: PathBuf,
    opportunities: PathBuf,
    top: Option<usize>,
) -> Result<()> {
    let profile = load_profile(&profile)?;
    let opportunities = load_opportunities(&opportunities)?;
    let catalog = load_catalog(None)?;
    let recommendations = generate(&profile, &opportunities, &catalog)?;

    let n = top.unwrap_or_else(env_digest_top_n);
    let digest = render_digest(&recommendations, n);
    if digest.is_empty() {
        println!("No matches to report.");
    } else {
        println!("{}", digest);
    }
    Ok(())
}

/// Handle the `suggest` command.
pub(crate) fn handle_suggest_command(profile: PathBuf, format: OutputFormat) -> Result<()> {
    let profile = load_profile(&profile)?;
    let suggestions = suggest_skills(&profile);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&suggestions)?);
    } else if suggestions.is_empty() {
        println!("No new skills to suggest.");
    } else {
        println!("Suggested skills:");
        for skill in &suggestions {
            println!("  - {}", skill);
        }
    }
    Ok(())
}

/// Handle the `resume` command.
pub(crate) fn handle_resume_command(
    profile: PathBuf,
    opportunities: PathBuf,
    id: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let profile = load_profile(&profile)?;
    let opportunities = load_opportunities(&opportunities)?;
    let catalog = load_catalog(None)?;
    let recommendations = generate(&profile, &opportunities, &catalog)?;

    let target = pick(&recommendations, id.as_deref())?;
    let focus = resume_focus(&profile, target);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&focus)?);
    } else {
        print!("{}", render_focus(&focus));
    }
    Ok(())
}

fn pick<'a>(
    recommendations: &'a [RankedRecommendation],
    id: Option<&str>,
) -> Result<&'a RankedRecommendation> {
    match id {
        Some(id) => recommendations
            .iter()
            .find(|rec| rec.opportunity.id.as_str() == id.trim())
            .ok_or_else(|| anyhow!("opportunity '{}' not found", id)),
        None => recommendations
            .first()
            .ok_or_else(|| anyhow!("no opportunities to choose from")),
    }
}

fn render_focus(focus: &ResumeFocus) -> String {
    let mut out = format!("{}\n", focus.headline);
    for skill in &focus.skills {
        out.push_str("  - ");
        out.push_str(skill);
        out.push('\n');
    }
    out
}
