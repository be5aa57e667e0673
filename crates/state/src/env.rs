use anyhow::Result;
use std::path::PathBuf;

/// Default number of lines in a notification digest.
pub const DEFAULT_DIGEST_TOP_N: usize = 3;

/// Returns the user's home directory.
pub fn home_dir() -> Result<PathBuf> {
    #[cfg(unix)]
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home));
    }
    dirs::home_dir().ok_or_else(|| anyhow::anyhow!("home directory not found"))
}

/// Returns `~/.internpath`, where config and session files live.
pub fn internpath_dir() -> Result<PathBuf> {
    Ok(home_dir()?.join(".internpath"))
}

/// Returns the path to the session state file.
pub fn session_file() -> Result<PathBuf> {
    if let Ok(custom) = std::env::var("INTERNPATH_SESSION") {
        return Ok(PathBuf::from(custom));
    }
    Ok(internpath_dir()?.join("session.json"))
}

/// Returns the skill catalog path from `INTERNPATH_CATALOG`, if set.
pub fn env_catalog_path() -> Option<PathBuf> {
    std::env::var("INTERNPATH_CATALOG")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
}

/// Returns the digest size from `INTERNPATH_DIGEST_TOP_N` (default: 3).
///
/// Unparseable values fall back to the default.
pub fn env_digest_top_n() -> usize {
    std::env::var("INTERNPATH_DIGEST_TOP_N")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(DEFAULT_DIGEST_TOP_N)
}
