//! Command-line interface for the `internpath` application.
//!
//! This binary is a thin wrapper; all behavior lives in the library half
//! of this crate.

fn main() -> anyhow::Result<()> {
    internpath::run()
}
