//! Shared test utilities for internpath crates.
//!
//! This crate provides common test fixtures and utilities used across
//! multiple crates in the internpath workspace.

use internpath_engine::{Education, Opportunity, Profile};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Profile document in the intake wizard's shape.
pub const SAMPLE_PROFILE_JSON: &str = r#"{
  "name": "Priya Sharma",
  "skills": "React, JavaScript, HTML, Python",
  "education": "undergraduate",
  "interests": ["web development"],
  "location": "Chennai",
  "experience": "fresher",
  "domains": ["tech"]
}"#;

/// Opportunity catalog mirroring the seed listings.
pub const SAMPLE_OPPORTUNITIES_JSON: &str = r#"[
  {
    "id": 1,
    "title": "Frontend Developer Intern",
    "company": "TechCorp India",
    "location": "Chennai, Remote",
    "skills": ["React", "JavaScript", "CSS", "HTML"],
    "stipend": "₹25,000/month",
    "duration": "6 months",
    "deadline": "15/11/2025",
    "description": "Build responsive web applications with React."
  },
  {
    "id": 2,
    "title": "UI/UX Design Intern",
    "company": "DesignHub",
    "location": "Bangalore",
    "skills": ["Figma", "Adobe XD", "User Research"],
    "stipend": "₹20,000/month",
    "duration": "4 months",
    "deadline": "2025-11-20",
    "description": "Design user-centred interfaces for mobile apps."
  },
  {
    "id": 3,
    "title": "Data Analyst Intern",
    "company": "DataInsights",
    "location": "Hyderabad",
    "skills": ["Python", "SQL", "Excel", "Tableau"],
    "stipend": "₹22,000/month",
    "duration": "5 months",
    "description": "Analyse business data and build dashboards.",
    "min_education": "undergraduate"
  }
]"#;

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = internpath_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value"
/// // When _guard drops, MY_VAR is restored to its original value
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Temporary HOME with an `.internpath` directory.
///
/// The tempdir is removed when this struct is dropped.
pub struct TestFixture {
    pub tempdir: tempfile::TempDir,
    /// Path to ~/.internpath in the temp environment
    pub internpath_dir: PathBuf,
}

impl TestFixture {
    /// Create `$HOME/.internpath/` in a fresh tempdir.
    ///
    /// Does NOT set HOME env var - use `home_guard()` for that.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let internpath_dir = tempdir.path().join(".internpath");
        std::fs::create_dir_all(&internpath_dir)?;
        Ok(Self {
            tempdir,
            internpath_dir,
        })
    }

    /// Get the path that should be set as HOME.
    pub fn home_path(&self) -> &Path {
        self.tempdir.path()
    }

    /// Create an RAII guard that sets HOME to this fixture's temp directory.
    pub fn home_guard(&self) -> EnvVarGuard {
        set_env_var("HOME", Some(&self.home_path().to_string_lossy()))
    }

    /// Write a file relative to HOME and return its path.
    pub fn write_file(&self, relative: &str, content: &str) -> std::io::Result<PathBuf> {
        let path = self.home_path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, content)?;
        Ok(path)
    }

    /// Write `~/.internpath/config.toml`.
    pub fn write_config(&self, toml: &str) -> std::io::Result<PathBuf> {
        self.write_file(".internpath/config.toml", toml)
    }

    /// Write the sample profile and opportunities; returns their paths.
    pub fn write_samples(&self) -> std::io::Result<(PathBuf, PathBuf)> {
        let profile = self.write_file("data/profile.json", SAMPLE_PROFILE_JSON)?;
        let opportunities =
            self.write_file("data/opportunities.json", SAMPLE_OPPORTUNITIES_JSON)?;
        Ok((profile, opportunities))
    }
}

/// The sample profile as an engine value.
pub fn sample_profile() -> Profile {
    Profile::new("Priya Sharma", Education::Undergraduate)
        .with_skills(["React", "JavaScript", "HTML", "Python"])
        .with_interests(["web development"])
        .with_domains(["tech"])
        .with_location("Chennai")
}

/// A minimal opportunity with the given id and required skills.
pub fn opportunity(id: &str, skills: &[&str]) -> Opportunity {
    Opportunity::new(id, format!("Role {id}"), skills.iter().copied())
}
