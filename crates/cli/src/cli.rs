use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    pub fn is_json(self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// Command-line interface for the `internpath` application.
#[derive(Debug, Parser)]
#[command(
    name = "internpath",
    version,
    about = "Internship recommendations with skill-gap analysis and course suggestions"
)]
pub struct Cli {
    /// Log debug output to stderr (overridden by `RUST_LOG`).
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available `internpath` commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ranks opportunities for a profile with skill gaps and courses.
    Recommend {
        /// Profile JSON file (intake format).
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Opportunities JSON file (array of opportunities).
        #[arg(long, value_name = "FILE")]
        opportunities: PathBuf,
        /// Skill catalog TOML file (overrides `INTERNPATH_CATALOG`).
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Show at most this many recommendations.
        #[arg(long, env = "INTERNPATH_LIMIT", value_name = "N")]
        limit: Option<usize>,
    },
    /// Classifies a list of missing skills and lists courses by category.
    Gap {
        /// Missing skills, comma-separated.
        #[arg(long, value_name = "SKILLS")]
        skills: String,
        /// Skill catalog TOML file (overrides `INTERNPATH_CATALOG`).
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Lists the skill catalog.
    Courses {
        /// Only show courses in this category.
        #[arg(long)]
        category: Option<String>,
        /// Skill catalog TOML file (overrides `INTERNPATH_CATALOG`).
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Prints the short notification digest of the top matches.
    Digest {
        /// Profile JSON file (intake format).
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Opportunities JSON file.
        #[arg(long, value_name = "FILE")]
        opportunities: PathBuf,
        /// Number of lines (overrides `INTERNPATH_DIGEST_TOP_N`, default 3).
        #[arg(long, value_name = "N")]
        top: Option<usize>,
    },
    /// Suggests skills to add to a profile.
    Suggest {
        /// Profile JSON file (intake format).
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Prints the resume focus for one opportunity.
    Resume {
        /// Profile JSON file (intake format).
        #[arg(long, value_name = "FILE")]
        profile: PathBuf,
        /// Opportunities JSON file.
        #[arg(long, value_name = "FILE")]
        opportunities: PathBuf,
        /// Opportunity id (defaults to the top-ranked one).
        #[arg(long)]
        id: Option<String>,
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Ranks opportunities for several profiles in parallel.
    Batch {
        /// Profile JSON files.
        #[arg(long = "profiles", value_name = "FILE", num_args = 1.., required = true)]
        profiles: Vec<PathBuf>,
        /// Opportunities JSON file.
        #[arg(long, value_name = "FILE")]
        opportunities: PathBuf,
        /// Skill catalog TOML file (overrides `INTERNPATH_CATALOG`).
        #[arg(long, value_name = "FILE")]
        catalog: Option<PathBuf>,
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Toggles the saved flag of an opportunity.
    Save {
        /// Opportunity id.
        id: String,
    },
    /// Records enrollment in the course for a skill.
    Enroll {
        /// Skill name.
        skill: String,
    },
    /// Marks a skill as completed (also enrolls).
    Complete {
        /// Skill name.
        skill: String,
    },
    /// Shows the saved session state.
    Session {
        /// Output format.
        #[arg(long, value_enum, env = "INTERNPATH_FORMAT", default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_recommend_with_options() {
        let cli = Cli::try_parse_from([
            "internpath",
            "recommend",
            "--profile",
            "p.json",
            "--opportunities",
            "o.json",
            "--format",
            "json",
            "--limit",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Recommend {
                profile,
                format,
                limit,
                catalog,
                ..
            } => {
                assert_eq!(profile, PathBuf::from("p.json"));
                assert!(format.is_json());
                assert_eq!(limit, Some(2));
                assert!(catalog.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_batch_with_several_profiles() {
        let cli = Cli::try_parse_from([
            "internpath",
            "batch",
            "--profiles",
            "a.json",
            "b.json",
            "--opportunities",
            "o.json",
        ])
        .unwrap();
        match cli.command {
            Commands::Batch { profiles, .. } => assert_eq!(profiles.len(), 2),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["internpath", "session", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let result = Cli::try_parse_from([
            "internpath",
            "suggest",
            "--profile",
            "p.json",
            "--format",
            "yaml",
        ]);
        assert!(result.is_err());
    }
}
