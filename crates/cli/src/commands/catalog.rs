//! CLI handler for the `courses` command.

use crate::cli::OutputFormat;
use crate::data::load_catalog;
use anyhow::Result;
use internpath_engine::{normalize_skill, CatalogEntry, SkillCatalog};
use std::fmt::Write as _;
use std::path::PathBuf;

fn select<'a>(catalog: &'a SkillCatalog, category: Option<&str>) -> Vec<&'a CatalogEntry> {
    let wanted = category.map(normalize_skill);
    catalog
        .iter()
        .filter(|entry| {
            wanted
                .as_deref()
                .map_or(true, |c| normalize_skill(&entry.course.category) == c)
        })
        .collect()
}

/// Handle the `courses` command.
pub(crate) fn handle_courses_command(
    category: Option<String>,
    catalog: Option<PathBuf>,
    format: OutputFormat,
) -> Result<()> {
    let catalog = load_catalog(catalog.as_deref())?;
    let entries = select(&catalog, category.as_deref());

    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No courses found.");
        return Ok(());
    }
    print!("{}", render_entries(&entries));
    Ok(())
}

fn render_entries(entries: &[&CatalogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        let course = &entry.course;
        let _ = writeln!(
            out,
            "{} [{}] {} - {}, {} weeks, {}, {:.1}/5",
            entry.skill,
            course.category,
            course.title,
            course.provider,
            course.duration_weeks,
            course.difficulty,
            course.rating
        );
    }
    out
}
