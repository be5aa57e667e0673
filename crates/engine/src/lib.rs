//! Recommendation and skill-gap engine for internship matching.
//!
//! This crate provides:
//! - Profile intake normalization and skill suggestions
//! - A skill catalog of remediation courses
//! - Match scoring, gap classification and course recommendation
//! - A deterministic pipeline producing ranked, explained recommendations
//! - Digest and resume-focus helpers for downstream collaborators
//!
//! The engine performs no I/O and holds no state between calls.

pub mod catalog;
pub mod error;
pub mod opportunity;
pub mod profile;
pub mod recommend;
pub mod resume;

pub use catalog::{CatalogEntry, Difficulty, SkillCatalog, SkillCourse, UNCATEGORIZED};
pub use error::{EngineError, InvalidInput, Result};
pub use opportunity::{Opportunity, OpportunityId};
pub use profile::{
    normalize_skill, suggest_skills, Education, ExperienceLevel, FieldList, Profile,
    ProfileInput, SkillTier,
};
pub use recommend::{
    classify, generate, generate_with, group_by_category, recommend, render_digest,
    render_fit_summary, score, severity_for_count, CourseRecommendation, FitSignal, GapAnalysis,
    MatchResult, MatchScorer, RankedRecommendation, Scorer, Severity,
};
pub use resume::{resume_focus, ResumeFocus};
