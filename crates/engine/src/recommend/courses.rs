//! Course Recommender: remediation courses for missing skills.

use crate::catalog::{SkillCatalog, SkillCourse};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A missing skill paired with its catalog course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    /// The missing skill, as written by the opportunity.
    pub skill: String,
    /// Course from the catalog.
    pub course: SkillCourse,
}

/// Look up a course for each missing skill.
///
/// Output follows `missing` order. Skills the catalog does not know are
/// omitted; no placeholder is produced for them.
pub fn recommend<S: AsRef<str>>(
    missing: &[S],
    catalog: &SkillCatalog,
) -> Vec<CourseRecommendation> {
    missing
        .iter()
        .filter_map(|skill| {
            let skill = skill.as_ref();
            catalog.get(skill).map(|course| CourseRecommendation {
                skill: skill.to_string(),
                course: course.clone(),
            })
        })
        .collect()
}

/// Group recommendations by course category.
///
/// Categories iterate alphabetically; within a category the input order
/// is kept.
pub fn group_by_category(
    recommendations: &[CourseRecommendation],
) -> BTreeMap<&str, Vec<&CourseRecommendation>> {
    let mut groups: BTreeMap<&str, Vec<&CourseRecommendation>> = BTreeMap::new();
    for rec in recommendations {
        groups
            .entry(rec.course.category.as_str())
            .or_default()
            .push(rec);
    }
    groups
}
