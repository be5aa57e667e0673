//! Command-line front end for the internpath recommendation engine.
//!
//! Reads profile and opportunity JSON files, runs the engine from
//! `internpath-engine`, and prints ranked recommendations, skill-gap
//! reports, course listings and digests. Per-user flags (saved
//! opportunities, enrolled courses, completed skills) live in the session
//! store from `internpath-state`.

pub mod cli;
pub mod config;
mod commands;
mod data;

use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_batch_command, handle_complete_command, handle_courses_command, handle_digest_command,
    handle_enroll_command, handle_gap_command, handle_recommend_command, handle_resume_command,
    handle_save_command, handle_session_command, handle_suggest_command,
};
use anyhow::Result;
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Main entry point for the `internpath` application.
pub fn run() -> Result<()> {
    // Config values feed clap through env vars, so they must be in place first.
    let applied = config::apply_config_to_env()?;

    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    for key in applied {
        tracing::debug!(target: "internpath::config", key, "Applied config file setting");
    }

    match cli.command {
        Commands::Recommend {
            profile,
            opportunities,
            catalog,
            format,
            limit,
        } => handle_recommend_command(profile, opportunities, catalog, format, limit),
        Commands::Gap {
            skills,
            catalog,
            format,
        } => handle_gap_command(skills, catalog, format),
        Commands::Courses {
            category,
            catalog,
            format,
        } => handle_courses_command(category, catalog, format),
        Commands::Digest {
            profile,
            opportunities,
            top,
        } => handle_digest_command(profile, opportunities, top),
        Commands::Suggest { profile, format } => handle_suggest_command(profile, format),
        Commands::Resume {
            profile,
            opportunities,
            id,
            format,
        } => handle_resume_command(profile, opportunities, id, format),
        Commands::Batch {
            profiles,
            opportunities,
            catalog,
            format,
        } => handle_batch_command(profiles, opportunities, catalog, format),
        Commands::Save { id } => handle_save_command(id),
        Commands::Enroll { skill } => handle_enroll_command(skill),
        Commands::Complete { skill } => handle_complete_command(skill),
        Commands::Session { format } => handle_session_command(format),
    }
}
