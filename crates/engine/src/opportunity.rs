//! Opportunity records supplied by the external catalog.

use crate::error::{InvalidInput, Result};
use crate::profile::{normalize_skill, Education};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Unique opportunity identifier.
///
/// Catalogs deliver ids as strings or as integers; both are kept as text.
/// Ordering puts purely numeric ids first, compared by value, then other ids
/// lexicographically, so `"2" < "10" < "ab"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OpportunityId(String);

impl OpportunityId {
    /// Create an id from text.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn numeric(&self) -> Option<u128> {
        if self.0.is_empty() || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.0.parse().ok()
    }
}

impl Ord for OpportunityId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}

impl PartialOrd for OpportunityId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OpportunityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for OpportunityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for OpportunityId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for OpportunityId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OpportunityId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => OpportunityId(text),
            RawId::Number(n) => OpportunityId(n.to_string()),
        })
    }
}

/// A position with required skills and display metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    /// Unique id within one catalog.
    pub id: OpportunityId,
    /// Position title.
    pub title: String,
    /// Hiring organization.
    #[serde(default, alias = "company")]
    pub organization: String,
    /// Free-text location; may mention "Remote".
    #[serde(default)]
    pub location: String,
    /// Required skills in catalog order, unique after normalization.
    #[serde(default, alias = "skills")]
    pub required_skills: Vec<String>,
    /// Stipend as displayed, e.g. `"₹25,000/month"`.
    #[serde(default)]
    pub stipend: String,
    /// Duration as displayed, e.g. `"6 months"`.
    #[serde(default)]
    pub duration: String,
    /// Application deadline.
    #[serde(default, with = "deadline_format")]
    pub deadline: Option<NaiveDate>,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Minimum education level the organization asks for.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_education: Option<Education>,
}

impl Opportunity {
    /// Create an opportunity with the given id, title and required skills.
    pub fn new<I, S>(id: impl Into<OpportunityId>, title: impl Into<String>, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            title: title.into(),
            organization: String::new(),
            location: String::new(),
            required_skills: skills.into_iter().map(Into::into).collect(),
            stipend: String::new(),
            duration: String::new(),
            deadline: None,
            description: String::new(),
            min_education: None,
        }
    }

    /// Set the organization.
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stipend and duration display strings.
    pub fn with_terms(mut self, stipend: impl Into<String>, duration: impl Into<String>) -> Self {
        self.stipend = stipend.into();
        self.duration = duration.into();
        self
    }

    /// Set the deadline.
    pub fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Set the minimum education level.
    pub fn with_min_education(mut self, education: Education) -> Self {
        self.min_education = Some(education);
        self
    }

    /// Whether the location advertises remote work.
    pub fn is_remote(&self) -> bool {
        self.location.to_lowercase().contains("remote")
    }

    /// Check the catalog contract for this record.
    ///
    /// The id must be non-blank; required skills must be non-blank and
    /// unique after normalization. Duplicates are reported, never dropped.
    pub fn validate(&self) -> Result<()> {
        if self.id.as_str().trim().is_empty() {
            return Err(InvalidInput::BlankOpportunityId {
                title: self.title.clone(),
            }
            .into());
        }

        let mut seen = HashSet::with_capacity(self.required_skills.len());
        for skill in &self.required_skills {
            let key = normalize_skill(skill);
            if key.is_empty() {
                return Err(InvalidInput::BlankRequiredSkill {
                    opportunity_id: self.id.to_string(),
                }
                .into());
            }
            if !seen.insert(key) {
                return Err(InvalidInput::DuplicateRequiredSkill {
                    opportunity_id: self.id.to_string(),
                    skill: skill.clone(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Deadlines are read as `YYYY-MM-DD` or `DD/MM/YYYY` and written as ISO dates.
mod deadline_format {
    use chrono::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

    pub fn serialize<S: Serializer>(
        date: &Option<NaiveDate>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => serializer.serialize_str(&date.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("unrecognized deadline '{raw}'")))
    }
}
