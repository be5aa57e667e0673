//! Skill Catalog: remediation courses keyed by skill name.
//!
//! The catalog is reference data. It is built once (either the built-in
//! table or a TOML document supplied by the host), validated at
//! construction, and never mutated afterwards, so any number of
//! `generate` calls may share one `&SkillCatalog` without locking.
//!
//! TOML layout:
//!
//! ```toml
//! [[course]]
//! skill = "React"
//! title = "Modern React Development"
//! provider = "NPTEL"
//! duration_weeks = 8
//! difficulty = "Intermediate"
//! rating = 4.8
//! category = "frontend"
//! url = "https://nptel.ac.in/courses/react"
//! ```

use crate::error::{EngineError, InvalidInput, Result};
use crate::profile::normalize_skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Highest rating a course may carry.
pub const MAX_RATING: f64 = 5.0;

/// Category used by hosts for skills with no catalog entry.
pub const UNCATEGORIZED: &str = "other";

/// Course difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// No prerequisites.
    Beginner,
    /// Assumes working familiarity.
    Intermediate,
    /// Assumes solid background.
    Advanced,
}

impl Difficulty {
    /// Wire label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = EngineError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(InvalidInput::UnknownLabel {
                kind: "difficulty",
                label: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Remediation course metadata for one skill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCourse {
    /// Course title.
    pub title: String,
    /// Course provider (NPTEL, SWAYAM, ...).
    pub provider: String,
    /// Length in weeks.
    pub duration_weeks: u32,
    /// Difficulty.
    pub difficulty: Difficulty,
    /// Rating in `[0, 5]`.
    pub rating: f64,
    /// Category tag used for grouping (`frontend`, `data`, ...).
    pub category: String,
    /// Enrollment URL.
    pub url: String,
    /// One-line description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Topics covered.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub topics: Vec<String>,
}

/// A catalog row: the skill as written plus its course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Skill name as written in the catalog.
    pub skill: String,
    /// The course.
    #[serde(flatten)]
    pub course: SkillCourse,
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default, rename = "course")]
    courses: Vec<CatalogEntry>,
}

/// Immutable mapping from normalized skill name to course.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

static BUILTIN: LazyLock<SkillCatalog> = LazyLock::new(|| {
    let entries = BUILTIN_COURSES
        .iter()
        .map(|row| (normalize_skill(row.skill), row.to_entry()))
        .collect();
    SkillCatalog { entries }
});

impl SkillCatalog {
    /// The process-wide built-in catalog.
    pub fn builtin() -> &'static SkillCatalog {
        &BUILTIN
    }

    /// Build a catalog from entries.
    ///
    /// Keys are compared case-insensitively; a repeated key or a rating
    /// outside `[0, 5]` is rejected.
    pub fn from_entries<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = CatalogEntry>,
    {
        let mut map = BTreeMap::new();
        for entry in entries {
            let key = normalize_skill(&entry.skill);
            if key.is_empty() {
                return Err(InvalidInput::MalformedCatalog {
                    message: format!("course '{}' has a blank skill", entry.course.title),
                }
                .into());
            }
            let rating = entry.course.rating;
            if !(0.0..=MAX_RATING).contains(&rating) {
                return Err(InvalidInput::RatingOutOfRange {
                    skill: entry.skill.clone(),
                    rating: rating.to_string(),
                }
                .into());
            }
            if map.contains_key(&key) {
                return Err(InvalidInput::DuplicateCatalogSkill { skill: entry.skill }.into());
            }
            map.insert(key, entry);
        }
        tracing::debug!(courses = map.len(), "Built skill catalog");
        Ok(Self { entries: map })
    }

    /// Parse a TOML catalog document (`[[course]]` tables).
    pub fn from_toml_str(document: &str) -> Result<Self> {
        let parsed: CatalogDocument =
            toml::from_str(document).map_err(|e| InvalidInput::MalformedCatalog {
                message: e.to_string(),
            })?;
        Self::from_entries(parsed.courses)
    }

    /// Course for a skill, matched case-insensitively.
    pub fn get(&self, skill: &str) -> Option<&SkillCourse> {
        self.entries
            .get(&normalize_skill(skill))
            .map(|entry| &entry.course)
    }

    /// Whether the catalog has a course for a skill.
    pub fn contains(&self, skill: &str) -> bool {
        self.entries.contains_key(&normalize_skill(skill))
    }

    /// Category of a skill, or [`UNCATEGORIZED`] if the catalog has no entry.
    pub fn category_of(&self, skill: &str) -> &str {
        self.get(skill)
            .map(|course| course.category.as_str())
            .unwrap_or(UNCATEGORIZED)
    }

    /// Entries in normalized-key order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

struct BuiltinCourse {
    skill: &'static str,
    title: &'static str,
    provider: &'static str,
    weeks: u32,
    difficulty: Difficulty,
    rating: f64,
    category: &'static str,
    url: &'static str,
    description: &'static str,
    topics: [&'static str; 3],
}

impl BuiltinCourse {
    fn to_entry(&self) -> CatalogEntry {
        CatalogEntry {
            skill: self.skill.to_string(),
            course: SkillCourse {
                title: self.title.to_string(),
                provider: self.provider.to_string(),
                duration_weeks: self.weeks,
                difficulty: self.difficulty,
                rating: self.rating,
                category: self.category.to_string(),
                url: self.url.to_string(),
                description: Some(self.description.to_string()),
                topics: self.topics.iter().map(|t| t.to_string()).collect(),
            },
        }
    }
}

const BUILTIN_COURSES: &[BuiltinCourse] = &[
    BuiltinCourse {
        skill: "JavaScript",
        title: "Complete JavaScript Programming",
        provider: "NPTEL",
        weeks: 8,
        difficulty: Difficulty::Beginner,
        rating: 4.8,
        category: "programming",
        url: "https://nptel.ac.in/courses/javascript",
        description: "Master JavaScript fundamentals and advanced concepts",
        topics: ["ES6+", "DOM Manipulation", "Async Programming"],
    },
    BuiltinCourse {
        skill: "Python",
        title: "Programming in Python",
        provider: "SWAYAM",
        weeks: 12,
        difficulty: Difficulty::Beginner,
        rating: 4.9,
        category: "programming",
        url: "https://swayam.gov.in/python",
        description: "Learn Python from basics to advanced applications",
        topics: ["Data Structures", "OOP", "Libraries"],
    },
    BuiltinCourse {
        skill: "TypeScript",
        title: "TypeScript Fundamentals",
        provider: "NPTEL",
        weeks: 6,
        difficulty: Difficulty::Intermediate,
        rating: 4.6,
        category: "programming",
        url: "https://nptel.ac.in/courses/typescript",
        description: "Add type safety to JavaScript applications",
        topics: ["Type System", "Interfaces", "Generics"],
    },
    BuiltinCourse {
        skill: "Java",
        title: "Object-Oriented Programming with Java",
        provider: "SWAYAM",
        weeks: 10,
        difficulty: Difficulty::Beginner,
        rating: 4.7,
        category: "programming",
        url: "https://swayam.gov.in/java",
        description: "Learn Java programming and OOP concepts",
        topics: ["Classes", "Inheritance", "Collections"],
    },
    BuiltinCourse {
        skill: "React",
        title: "Modern React Development",
        provider: "NPTEL",
        weeks: 8,
        difficulty: Difficulty::Intermediate,
        rating: 4.8,
        category: "frontend",
        url: "https://nptel.ac.in/courses/react",
        description: "Build dynamic web applications with React",
        topics: ["Components", "Hooks", "State Management"],
    },
    BuiltinCourse {
        skill: "Vue.js",
        title: "Vue.js Complete Guide",
        provider: "SWAYAM",
        weeks: 6,
        difficulty: Difficulty::Intermediate,
        rating: 4.5,
        category: "frontend",
        url: "https://swayam.gov.in/vuejs",
        description: "Progressive framework for building UIs",
        topics: ["Directives", "Components", "Vuex"],
    },
    BuiltinCourse {
        skill: "CSS",
        title: "Advanced CSS and Responsive Design",
        provider: "NPTEL",
        weeks: 4,
        difficulty: Difficulty::Beginner,
        rating: 4.6,
        category: "frontend",
        url: "https://nptel.ac.in/courses/css",
        description: "Master CSS layouts and responsive design",
        topics: ["Flexbox", "Grid", "Animations"],
    },
    BuiltinCourse {
        skill: "Node.js",
        title: "Node.js Backend Development",
        provider: "SWAYAM",
        weeks: 10,
        difficulty: Difficulty::Intermediate,
        rating: 4.7,
        category: "backend",
        url: "https://swayam.gov.in/nodejs",
        description: "Build scalable server-side applications",
        topics: ["Express.js", "APIs", "Database Integration"],
    },
    BuiltinCourse {
        skill: "MongoDB",
        title: "NoSQL Database with MongoDB",
        provider: "NPTEL",
        weeks: 6,
        difficulty: Difficulty::Beginner,
        rating: 4.4,
        category: "backend",
        url: "https://nptel.ac.in/courses/mongodb",
        description: "Learn document-based database design",
        topics: ["CRUD Operations", "Aggregation", "Indexing"],
    },
    BuiltinCourse {
        skill: "Figma",
        title: "UI/UX Design with Figma",
        provider: "SWAYAM",
        weeks: 5,
        difficulty: Difficulty::Beginner,
        rating: 4.8,
        category: "design",
        url: "https://swayam.gov.in/figma",
        description: "Design beautiful and functional interfaces",
        topics: ["Prototyping", "Components", "Design Systems"],
    },
    BuiltinCourse {
        skill: "Adobe XD",
        title: "Adobe XD for UI Design",
        provider: "NPTEL",
        weeks: 4,
        difficulty: Difficulty::Beginner,
        rating: 4.3,
        category: "design",
        url: "https://nptel.ac.in/courses/adobe-xd",
        description: "Create wireframes and interactive prototypes",
        topics: ["Wireframing", "Prototyping", "Collaboration"],
    },
    BuiltinCourse {
        skill: "User Research",
        title: "UX Research Methods",
        provider: "SWAYAM",
        weeks: 8,
        difficulty: Difficulty::Intermediate,
        rating: 4.7,
        category: "design",
        url: "https://swayam.gov.in/ux-research",
        description: "Learn to conduct effective user research",
        topics: ["Interviews", "Surveys", "Usability Testing"],
    },
    BuiltinCourse {
        skill: "Machine Learning",
        title: "Introduction to Machine Learning",
        provider: "NPTEL",
        weeks: 12,
        difficulty: Difficulty::Advanced,
        rating: 4.9,
        category: "data",
        url: "https://nptel.ac.in/courses/ml",
        description: "Learn ML algorithms and applications",
        topics: ["Supervised Learning", "Neural Networks", "Deep Learning"],
    },
    BuiltinCourse {
        skill: "Data Analysis",
        title: "Data Analytics with Python",
        provider: "SWAYAM",
        weeks: 10,
        difficulty: Difficulty::Intermediate,
        rating: 4.6,
        category: "data",
        url: "https://swayam.gov.in/data-analytics",
        description: "Analyze and visualize data effectively",
        topics: ["Pandas", "NumPy", "Visualization"],
    },
    BuiltinCourse {
        skill: "Communication",
        title: "Effective Communication Skills",
        provider: "SWAYAM",
        weeks: 4,
        difficulty: Difficulty::Beginner,
        rating: 4.5,
        category: "soft",
        url: "https://swayam.gov.in/communication",
        description: "Improve verbal and written communication",
        topics: ["Presentation Skills", "Writing", "Interpersonal Skills"],
    },
    BuiltinCourse {
        skill: "Leadership",
        title: "Leadership and Team Management",
        provider: "NPTEL",
        weeks: 6,
        difficulty: Difficulty::Intermediate,
        rating: 4.4,
        category: "soft",
        url: "https://nptel.ac.in/courses/leadership",
        description: "Develop leadership and management skills",
        topics: ["Team Building", "Decision Making", "Conflict Resolution"],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL_CATALOG: &str = r#"
[[course]]
skill = "Rust"
title = "Rust in Practice"
provider = "NPTEL"
duration_weeks = 6
difficulty = "Advanced"
rating = 4.2
category = "programming"
url = "https://example.org/rust"
topics = ["Ownership", "Traits"]

[[course]]
skill = "SQL"
title = "Relational Databases"
provider = "SWAYAM"
duration_weeks = 4
difficulty = "Beginner"
rating = 3.9
category = "backend"
url = "https://example.org/sql"
"#;

    fn entry(skill: &str, rating: f64) -> CatalogEntry {
        CatalogEntry {
            skill: skill.to_string(),
            course: SkillCourse {
                title: format!("{skill} course"),
                provider: "NPTEL".into(),
                duration_weeks: 4,
                difficulty: Difficulty::Beginner,
                rating,
                category: "programming".into(),
                url: "https://example.org".into(),
                description: None,
                topics: Vec::new(),
            },
        }
    }

    #[test]
    fn test_builtin_has_sixteen_courses() {
        let catalog = SkillCatalog::builtin();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.get("react").map(|c| c.duration_weeks), Some(8));
        assert_eq!(catalog.category_of("Machine Learning"), "data");
    }

    #[test]
    fn test_builtin_passes_validation() {
        let entries: Vec<_> = SkillCatalog::builtin().iter().cloned().collect();
        let rebuilt = SkillCatalog::from_entries(entries).unwrap();
        assert_eq!(&rebuilt, SkillCatalog::builtin());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = SkillCatalog::builtin();
        assert!(catalog.contains("NODE.JS"));
        assert!(catalog.contains(" node.js "));
        assert!(!catalog.contains("node"));
    }

    #[test]
    fn test_unknown_skill_is_uncategorized() {
        assert_eq!(SkillCatalog::builtin().category_of("Kotlin"), UNCATEGORIZED);
    }

    #[test]
    fn test_from_toml_str() {
        let catalog = SkillCatalog::from_toml_str(SMALL_CATALOG).unwrap();
        assert_eq!(catalog.len(), 2);
        let rust = catalog.get("rust").unwrap();
        assert_eq!(rust.difficulty, Difficulty::Advanced);
        assert_eq!(rust.topics, vec!["Ownership", "Traits"]);
        assert_eq!(catalog.get("sql").unwrap().description, None);
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = SkillCatalog::from_toml_str("[[course]]\nskill = 3").unwrap_err();
        assert!(matches!(
            err.reason(),
            InvalidInput::MalformedCatalog { .. }
        ));
    }

    #[test]
    fn test_duplicate_keys_rejected_case_insensitively() {
        let err = SkillCatalog::from_entries([entry("Python", 4.0), entry("python ", 4.5)])
            .unwrap_err();
        assert_eq!(
            err.reason(),
            &InvalidInput::DuplicateCatalogSkill {
                skill: "python ".into()
            }
        );
    }

    #[test]
    fn test_rating_bounds() {
        assert!(SkillCatalog::from_entries([entry("A", 0.0), entry("B", 5.0)]).is_ok());
        let err = SkillCatalog::from_entries([entry("C", 5.1)]).unwrap_err();
        assert!(matches!(
            err.reason(),
            InvalidInput::RatingOutOfRange { skill, .. } if skill == "C"
        ));
        assert!(SkillCatalog::from_entries([entry("D", f64::NAN)]).is_err());
    }

    #[test]
    fn test_difficulty_from_str() {
        assert_eq!(
            "intermediate".parse::<Difficulty>().unwrap(),
            Difficulty::Intermediate
        );
        assert!(matches!(
            "expert".parse::<Difficulty>().unwrap_err().reason(),
            InvalidInput::UnknownLabel { kind: "difficulty", .. }
        ));
    }
}
