//! Loading of profile, opportunity and catalog files.

use anyhow::{Context, Result};
use internpath_engine::{Opportunity, Profile, ProfileInput, SkillCatalog};
use internpath_state::env_catalog_path;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Read an intake profile document and normalize it.
pub fn load_profile(path: &Path) -> Result<Profile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read profile {}", path.display()))?;
    let input: ProfileInput = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse profile {}", path.display()))?;
    Ok(Profile::from_input(input)?)
}

/// Read a JSON array of opportunities.
pub fn load_opportunities(path: &Path) -> Result<Vec<Opportunity>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read opportunities {}", path.display()))?;
    let opportunities: Vec<Opportunity> = serde_json::from_str(&text)
        .with_context(|| format!("failed to parse opportunities {}", path.display()))?;
    tracing::debug!(
        target: "internpath::data",
        path = %path.display(),
        count = opportunities.len(),
        "Loaded opportunities"
    );
    Ok(opportunities)
}

/// Resolve the skill catalog: explicit path, then `INTERNPATH_CATALOG`, then built-in.
pub fn load_catalog(explicit: Option<&Path>) -> Result<Cow<'static, SkillCatalog>> {
    let path: Option<PathBuf> = explicit.map(Path::to_path_buf).or_else(env_catalog_path);
    let Some(path) = path else {
        return Ok(Cow::Borrowed(SkillCatalog::builtin()));
    };

    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read skill catalog {}", path.display()))?;
    let catalog = SkillCatalog::from_toml_str(&text)?;
    tracing::debug!(
        target: "internpath::data",
        path = %path.display(),
        courses = catalog.len(),
        "Loaded skill catalog"
    );
    Ok(Cow::Owned(catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use internpath_engine::InvalidInput;
    use internpath_test_utils::{env_guard, sample_profile, set_env_var, TestFixture};

    const CATALOG: &str = r#"
[[course]]
skill = "Tableau"
title = "Dashboards with Tableau"
provider = "SWAYAM"
duration_weeks = 3
difficulty = "Beginner"
rating = 4.1
category = "data"
url = "https://example.org/tableau"
"#;

    #[test]
    fn load_sample_files() {
        let fixture = TestFixture::new().unwrap();
        let (profile, opportunities) = fixture.write_samples().unwrap();

        let loaded = load_profile(&profile).unwrap();
        assert_eq!(loaded.skills(), sample_profile().skills());
        assert_eq!(load_opportunities(&opportunities).unwrap().len(), 3);
    }

    #[test]
    fn profile_without_education_is_invalid_input() {
        let fixture = TestFixture::new().unwrap();
        let path = fixture
            .write_file("p.json", r#"{"name":"A","skills":"React"}"#)
            .unwrap();
        let err = load_profile(&path).unwrap_err();
        let engine = err.downcast_ref::<internpath_engine::EngineError>().unwrap();
        assert!(matches!(
            engine.reason(),
            InvalidInput::MissingField { field: "education" }
        ));
    }

    #[test]
    fn missing_file_names_path() {
        let err = load_opportunities(Path::new("/nonexistent/opps.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/opps.json"));
    }

    #[test]
    fn catalog_resolution_order() {
        let _g = env_guard();
        let fixture = TestFixture::new().unwrap();
        let path = fixture.write_file("catalog.toml", CATALOG).unwrap();

        let _unset = set_env_var("INTERNPATH_CATALOG", None);
        assert!(matches!(load_catalog(None).unwrap(), Cow::Borrowed(_)));

        let explicit = load_catalog(Some(&path)).unwrap();
        assert!(explicit.contains("tableau"));
        assert_eq!(explicit.len(), 1);

        let _env = set_env_var("INTERNPATH_CATALOG", Some(&path.to_string_lossy()));
        assert!(load_catalog(None).unwrap().contains("Tableau"));
    }

    #[test]
    fn duplicate_catalog_entries_rejected() {
        let _g = env_guard();
        let fixture = TestFixture::new().unwrap();
        let doubled = format!("{CATALOG}\n{}", CATALOG.replace("Tableau\"", "tableau\""));
        let path = fixture.write_file("catalog.toml", &doubled).unwrap();
        let err = load_catalog(Some(&path)).unwrap_err();
        assert!(err.to_string().starts_with("invalid input:"));
    }
}
