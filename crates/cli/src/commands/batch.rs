//! CLI handler for the `batch` command.
//!
//! Each profile is an independent `generate` call; calls run on the rayon
//! pool and share the catalog and opportunity list read-only.

use crate::cli::OutputFormat;
use crate::data::{load_catalog, load_opportunities, load_profile};
use anyhow::{Context, Result};
use internpath_engine::{generate, Opportunity, Profile, Severity, SkillCatalog};
use rayon::prelude::*;
use serde::Serialize;
use std::path::PathBuf;

/// Best match for one profile.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct BatchResult {
    pub profile: String,
    pub ranked: usize,
    pub top: Option<TopMatch>,
}

/// Summary of a top-ranked recommendation.
#[derive(Debug, Serialize, PartialEq)]
pub(crate) struct TopMatch {
    pub id: String,
    pub title: String,
    pub score: u8,
    pub severity: Severity,
    pub missing_skills: Vec<String>,
}

pub(crate) fn run_batch(
    profiles: &[(String, Profile)],
    opportunities: &[Opportunity],
    catalog: &SkillCatalog,
) -> Result<Vec<BatchResult>> {
    profiles
        .par_iter()
        .map(|(label, profile)| -> Result<BatchResult> {
            let recs = generate(profile, opportunities, catalog)?;
            let top = recs.into_iter().next().map(|rec| TopMatch {
                id: rec.opportunity.id.to_string(),
                title: rec.opportunity.title,
                score: rec.score,
                severity: rec.severity,
                missing_skills: rec.missing_skills,
            });
            Ok(BatchResult {
                profile: label.clone(),
                ranked: opportunities.len(),
                top,
            })
        })
        .collect()
}

/// Handle the `batch` command.
pub(crate) fn handle_batch_command(
    profiles: Vec<PathBuf>,
    opportunities: PathBuf,
    catalog: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let loaded = profiles
        .iter()
        .map(|path| -> Result<(String, Profile)> {
            let profile = load_profile(path)
                .with_context(|| format!("in batch profile {}", path.display()))?;
            let label = if profile.name().is_empty() {
                path.display().to_string()
            } else {
                profile.name().to_string()
            };
            Ok((label, profile))
        })
        .collect::<Result<Vec<_>>>()?;
    let opportunities = load_opportunities(&opportunities)?;
    let catalog = load_catalog(catalog.as_deref())?;

    let results = run_batch(&loaded, &opportunities, &catalog)?;
    tracing::debug!(
        target: "internpath::batch",
        profiles = results.len(),
        "Batch complete"
    );

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    for result in &results {
        match &result.top {
            Some(top) => println!(
                "{}: {} (id {}) - {}% match, {} gap",
                result.profile, top.title, top.id, top.score, top.severity
            ),
            None => println!("{}: no opportunities", result.profile),
        }
    }
    Ok(())
}
