//! Error types for the recommendation engine.
//!
//! The engine raises a single kind of error, [`EngineError::InvalidInput`].
//! It is always synchronous and always surfaced to the caller; there is
//! nothing to retry because the engine performs no I/O. A missing catalog
//! entry for a skill is not an error.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T> = std::result::Result<T, EngineError>;

/// Errors raised by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// Arguments violated the engine's input contract.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

impl EngineError {
    /// The contract violation behind this error.
    pub fn reason(&self) -> &InvalidInput {
        match self {
            EngineError::InvalidInput(reason) => reason,
        }
    }
}

/// The specific contract violation carried by [`EngineError::InvalidInput`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidInput {
    /// Two opportunities share the same id.
    #[error("duplicate opportunity id '{id}'")]
    DuplicateOpportunityId {
        /// The repeated id.
        id: String,
    },

    /// An opportunity has an empty id.
    #[error("opportunity '{title}' has a blank id")]
    BlankOpportunityId {
        /// Title of the offending opportunity.
        title: String,
    },

    /// An opportunity lists the same skill twice once names are normalized.
    #[error("opportunity '{opportunity_id}' lists required skill '{skill}' more than once")]
    DuplicateRequiredSkill {
        /// Id of the offending opportunity.
        opportunity_id: String,
        /// The repeated skill, as first written in the catalog.
        skill: String,
    },

    /// An opportunity lists a skill that is empty after trimming.
    #[error("opportunity '{opportunity_id}' lists a blank required skill")]
    BlankRequiredSkill {
        /// Id of the offending opportunity.
        opportunity_id: String,
    },

    /// A required intake field was absent or blank.
    #[error("missing required field '{field}'")]
    MissingField {
        /// Field name.
        field: &'static str,
    },

    /// A label did not match any known variant of an enumeration.
    #[error("unknown {kind} '{label}'")]
    UnknownLabel {
        /// Which enumeration was being parsed.
        kind: &'static str,
        /// The label that failed to parse.
        label: String,
    },

    /// A count that can only be non-negative was negative.
    #[error("count must be non-negative, got {count}")]
    NegativeCount {
        /// The offending count.
        count: i64,
    },

    /// Two catalog entries resolve to the same skill key.
    #[error("skill catalog lists '{skill}' more than once")]
    DuplicateCatalogSkill {
        /// The repeated skill key.
        skill: String,
    },

    /// A catalog course rating fell outside `[0, 5]`.
    #[error("course rating for '{skill}' must be within 0-5, got {rating}")]
    RatingOutOfRange {
        /// Skill whose course carries the rating.
        skill: String,
        /// The offending rating, formatted.
        rating: String,
    },

    /// The skill catalog document could not be parsed.
    #[error("malformed skill catalog: {message}")]
    MalformedCatalog {
        /// Parser message.
        message: String,
    },
}
