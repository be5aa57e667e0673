//! CLI integration tests for `internpath`.
//!
//! Verifies argument plumbing from the binary through the engine and the
//! session store, with HOME pointed at a temp directory.

use std::env;
use std::path::Path;
use std::process::{Command, Output};

use anyhow::{Context, Result};
use internpath_test_utils::{env_guard, TestFixture};
use scopeguard::guard;

fn internpath(home: &Path, args: &[&str]) -> Result<Output> {
    let bin_path = env!("CARGO_BIN_EXE_internpath");
    let output = Command::new(bin_path)
        .env("HOME", home)
        .env_remove("INTERNPATH_FORMAT")
        .env_remove("INTERNPATH_LIMIT")
        .env_remove("INTERNPATH_CATALOG")
        .env_remove("INTERNPATH_SESSION")
        .env_remove("INTERNPATH_DIGEST_TOP_N")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .with_context(|| format!("Failed to execute internpath {:?}", args))?;

    if cfg!(debug_assertions) {
        eprintln!("stdout:\n{}", String::from_utf8_lossy(&output.stdout));
        eprintln!("stderr:\n{}", String::from_utf8_lossy(&output.stderr));
    }
    Ok(output)
}

#[test]
fn given_sample_data_when_recommend_then_frontend_role_ranks_first() -> Result<()> {
    let _g = env_guard();
    let original_home = env::var("HOME").ok();
    let _home_guard = guard(original_home, |original_home| match original_home {
        Some(home) => env::set_var("HOME", home),
        None => env::remove_var("HOME"),
    });

    // GIVEN the sample profile and opportunity files
    let fixture = TestFixture::new()?;
    env::set_var("HOME", fixture.home_path());
    let (profile, opportunities) = fixture.write_samples()?;

    // WHEN the user runs `internpath recommend`
    let output = internpath(
        fixture.home_path(),
        &[
            "recommend",
            "--profile",
            &profile.to_string_lossy(),
            "--opportunities",
            &opportunities.to_string_lossy(),
        ],
    )?;
    let stdout = String::from_utf8_lossy(&output.stdout);

    // THEN the ranked list is printed with the frontend role on top
    assert!(output.status.success(), "recommend should succeed");
    assert!(stdout.contains("#1 Frontend Developer Intern at TechCorp India (id 1)"));
    assert!(stdout.contains("75% skill match"));
    assert!(stdout.contains("#3 UI/UX Design Intern"));
    Ok(())
}

#[test]
fn given_json_format_when_recommend_then_output_parses() -> Result<()> {
    let _g = env_guard();
    let fixture = TestFixture::new()?;
    let (profile, opportunities) = fixture.write_samples()?;

    let output = internpath(
        fixture.home_path(),
        &[
            "recommend",
            "--profile",
            &profile.to_string_lossy(),
            "--opportunities",
            &opportunities.to_string_lossy(),
            "--format",
            "json",
            "--limit",
            "2",
        ],
    )?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let items = parsed.as_array().context("expected a JSON array")?;
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["rank"], 1);
    assert_eq!(items[0]["score"], 75);
    assert_eq!(items[1]["score"], 25);
    Ok(())
}

#[test]
fn given_duplicate_ids_when_recommend_then_invalid_input_is_reported() -> Result<()> {
    let _g = env_guard();
    let fixture = TestFixture::new()?;
    let (profile, _) = fixture.write_samples()?;
    let opportunities = fixture.write_file(
        "data/dupes.json",
        r#"[
  {"id": "7", "title": "A", "required_skills": ["Go"]},
  {"id": "7", "title": "B", "required_skills": ["Rust"]}
]"#,
    )?;

    let output = internpath(
        fixture.home_path(),
        &[
            "recommend",
            "--profile",
            &profile.to_string_lossy(),
            "--opportunities",
            &opportunities.to_string_lossy(),
        ],
    )?;
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stderr.contains("invalid input:"), "stderr was: {}", stderr);
    assert!(output.stdout.is_empty());
    Ok(())
}

#[test]
fn given_save_when_session_then_saved_id_is_listed() -> Result<()> {
    let _g = env_guard();
    let fixture = TestFixture::new()?;

    let saved = internpath(fixture.home_path(), &["save", "3"])?;
    assert!(saved.status.success());
    assert!(String::from_utf8_lossy(&saved.stdout).contains("Saved opportunity 3"));

    let completed = internpath(fixture.home_path(), &["complete", "SQL"])?;
    assert!(completed.status.success());

    let session = internpath(fixture.home_path(), &["session", "--format", "json"])?;
    assert!(session.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&session.stdout)?;
    assert_eq!(parsed["saved_opportunities"], serde_json::json!(["3"]));
    assert_eq!(parsed["completed_skills"], serde_json::json!(["sql"]));
    assert_eq!(parsed["enrolled_courses"], serde_json::json!(["sql"]));

    // Saving again toggles the flag off
    let removed = internpath(fixture.home_path(), &["save", "3"])?;
    assert!(String::from_utf8_lossy(&removed.stdout).contains("Removed opportunity 3"));
    assert!(fixture.internpath_dir.join("session.json").exists());
    Ok(())
}

#[test]
fn given_config_file_when_courses_then_format_comes_from_config() -> Result<()> {
    let _g = env_guard();
    let fixture = TestFixture::new()?;
    fixture.write_config("[output]\nformat = \"json\"\n")?;

    let output = internpath(fixture.home_path(), &["courses", "--category", "design"])?;
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    let items = parsed.as_array().context("expected a JSON array")?;
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["skill"], "Adobe XD");
    Ok(())
}
