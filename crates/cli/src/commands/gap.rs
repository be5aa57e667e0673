//! CLI handler for the `gap` command.

use crate::cli::OutputFormat;
use crate::data::load_catalog;
use anyhow::Result;
use internpath_engine::{
    classify, group_by_category, recommend, CourseRecommendation, FieldList, Severity,
    SkillCatalog,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::PathBuf;

/// Gap classification with courses grouped by category.
#[derive(Debug, Serialize)]
pub(crate) struct GapReport {
    pub missing_skills: Vec<String>,
    pub severity: Severity,
    pub explanation: String,
    pub courses: BTreeMap<String, Vec<CourseRecommendation>>,
    pub without_course: Vec<String>,
}

pub(crate) fn build_gap_report(missing: Vec<String>, catalog: &SkillCatalog) -> GapReport {
    let analysis = classify(&missing);
    let recommended = recommend(&missing, catalog);
    let courses = group_by_category(&recommended)
        .into_iter()
        .map(|(category, recs)| (category.to_string(), recs.into_iter().cloned().collect()))
        .collect();
    let without_course = missing
        .iter()
        .filter(|skill| !catalog.contains(skill))
        .cloned()
        .collect();

    GapReport {
        missing_skills: missing,
        severity: analysis.severity,
        explanation: analysis.explanation,
        courses,
        without_course,
    }
}

/// Handle the `gap` command.
pub(crate) fn handle_gap_command(
    skills: String,
    catalog: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let report = build_gap_report(FieldList::Text(skills).entries(), &catalog);

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_gap_report(&report));
    }
    Ok(())
}

fn render_gap_report(report: &GapReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Skill gap: {} ({} missing)",
        report.severity,
        report.missing_skills.len()
    );
    let _ = writeln!(out, "{}", report.explanation);

    for (category, courses) in &report.courses {
        let _ = writeln!(out, "\n[{}]", category);
        for rec in courses {
            let _ = writeln!(
                out,
                "  {}: {} - {}, {} weeks ({})",
                rec.skill,
                rec.course.title,
                rec.course.provider,
                rec.course.duration_weeks,
                rec.course.url
            );
        }
    }

    if !report.without_course.is_empty() {
        let _ = writeln!(
            out,
            "\nNo course available: {}",
            report.without_course.join(", ")
        );
    }
    out
}
