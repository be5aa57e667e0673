use crate::env::session_file;
use anyhow::{Context, Result};
use internpath_engine::normalize_skill;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

/// Per-user flags kept outside the engine: saved opportunities, enrolled
/// courses and completed skills.
///
/// Opportunity ids are stored as given (trimmed). Skill keys are normalized
/// the same way the engine normalizes skills.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub saved_opportunities: BTreeSet<String>,
    #[serde(default)]
    pub enrolled_courses: BTreeSet<String>,
    #[serde(default)]
    pub completed_skills: BTreeSet<String>,
}

impl SessionState {
    /// Flip the saved flag for an opportunity and return the new flag.
    pub fn toggle_saved(&mut self, opportunity_id: &str) -> bool {
        let id = opportunity_id.trim().to_string();
        if self.saved_opportunities.remove(&id) {
            false
        } else {
            self.saved_opportunities.insert(id);
            true
        }
    }

    /// Record enrollment in the course for a skill.
    pub fn enroll(&mut self, skill: &str) {
        self.enrolled_courses.insert(normalize_skill(skill));
    }

    /// Mark a skill completed. Completing a skill also enrolls in it.
    pub fn complete(&mut self, skill: &str) {
        let key = normalize_skill(skill);
        self.enrolled_courses.insert(key.clone());
        self.completed_skills.insert(key);
    }

    pub fn is_saved(&self, opportunity_id: &str) -> bool {
        self.saved_opportunities.contains(opportunity_id.trim())
    }

    pub fn is_enrolled(&self, skill: &str) -> bool {
        self.enrolled_courses.contains(&normalize_skill(skill))
    }

    pub fn is_completed(&self, skill: &str) -> bool {
        self.completed_skills.contains(&normalize_skill(skill))
    }
}

/// Load session state; a missing file yields the default state.
pub fn load_session() -> Result<SessionState> {
    load_session_from(&session_file()?)
}

/// Persist session state.
pub fn save_session(state: &SessionState) -> Result<()> {
    save_session_to(&session_file()?, state)
}

pub fn load_session_from(path: &Path) -> Result<SessionState> {
    if !path.exists() {
        return Ok(SessionState::default());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read session file {}", path.display()))?;
    serde_json::from_str(&data)
        .with_context(|| format!("failed to parse session file {}", path.display()))
}

/// Write the state next to `path` and rename it into place.
pub fn save_session_to(path: &Path, state: &SessionState) -> Result<()> {
    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)
        .with_context(|| format!("failed to create {}", parent.display()))?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(serde_json::to_string_pretty(state)?.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path)
        .with_context(|| format!("failed to write session file {}", path.display()))?;
    Ok(())
}
