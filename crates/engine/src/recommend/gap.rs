//! Gap Classifier: severity tier for a set of missing skills.

use crate::error::{InvalidInput, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest missing-skill count classified as [`Severity::Low`].
pub const LOW_MAX: usize = 2;
/// Largest missing-skill count classified as [`Severity::Medium`].
pub const MEDIUM_MAX: usize = 5;

/// Coarse size of a skill gap.
///
/// Thresholds are fixed: 0 is none, 1-2 low, 3-5 medium, 6 or more high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Nothing missing.
    None,
    /// One or two skills missing.
    Low,
    /// Three to five skills missing.
    Medium,
    /// More than five skills missing.
    High,
}

impl Severity {
    /// Tier for a missing-skill count.
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Severity::None,
            1..=LOW_MAX => Severity::Low,
            n if n <= MEDIUM_MAX => Severity::Medium,
            _ => Severity::High,
        }
    }

    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "none",
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    /// Fixed explanation shown with the tier.
    pub fn explanation(&self) -> &'static str {
        match self {
            Severity::None => "Perfect match! No skill gaps found.",
            Severity::Low => "Minor skill gaps - easy to bridge!",
            Severity::Medium => "Some skill development needed.",
            Severity::High => "Significant skill gaps - but achievable!",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of classifying a set of missing skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapAnalysis {
    /// Severity tier.
    pub severity: Severity,
    /// Explanation text for the tier.
    pub explanation: String,
}

impl From<Severity> for GapAnalysis {
    fn from(severity: Severity) -> Self {
        Self {
            severity,
            explanation: severity.explanation().to_string(),
        }
    }
}

/// Classify a list of missing skills.
pub fn classify<S: AsRef<str>>(missing: &[S]) -> GapAnalysis {
    GapAnalysis::from(Severity::from_count(missing.len()))
}

/// Tier for a count coming from outside the engine.
///
/// Negative counts cannot describe a skill list and are rejected.
pub fn severity_for_count(count: i64) -> Result<Severity> {
    usize::try_from(count)
        .map(Severity::from_count)
        .map_err(|_| InvalidInput::NegativeCount { count }.into())
}
