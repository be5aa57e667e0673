//! Session state and environment configuration for internpath.
//!
//! This crate provides utilities for:
//! - Reading environment variables for configuration.
//! - Persisting per-user session flags (saved opportunities, enrolled
//!   courses, completed skills) as JSON under `~/.internpath`.

pub mod env;
pub mod persistence;

pub use env::{
    env_catalog_path, env_digest_top_n, home_dir, internpath_dir, session_file,
    DEFAULT_DIGEST_TOP_N,
};
pub use persistence::{
    load_session, load_session_from, save_session, save_session_to, SessionState,
};
