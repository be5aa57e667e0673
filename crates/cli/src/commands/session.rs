//! CLI handlers for session-store commands (`save`, `enroll`, `complete`, `session`).

use crate::cli::OutputFormat;
use anyhow::Result;
use internpath_state::{load_session, save_session, SessionState};

/// Handle the `save` command.
pub(crate) fn handle_save_command(id: String) -> Result<()> {
    let mut session = load_session()?;
    let saved = session.toggle_saved(&id);
    save_session(&session)?;

    if saved {
        println!("Saved opportunity {}", id.trim());
    } else {
        println!("Removed opportunity {} from saved", id.trim());
    }
    Ok(())
}

/// Handle the `enroll` command.
pub(crate) fn handle_enroll_command(skill: String) -> Result<()> {
    let mut session = load_session()?;
    session.enroll(&skill);
    save_session(&session)?;
    println!("Enrolled in {} course", skill.trim());
    Ok(())
}

/// Handle the `complete` command.
pub(crate) fn handle_complete_command(skill: String) -> Result<()> {
    let mut session = load_session()?;
    session.complete(&skill);
    save_session(&session)?;
    println!("Marked {} as completed", skill.trim());
    Ok(())
}

/// Handle the `session` command.
pub(crate) fn handle_session_command(format: OutputFormat) -> Result<()> {
    let session = load_session()?;
    if format.is_json() {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        print!("{}", render_session(&session));
    }
    Ok(())
}

fn render_session(session: &SessionState) -> String {
    fn line(label: &str, items: &std::collections::BTreeSet<String>) -> String {
        if items.is_empty() {
            format!("{}: (none)\n", label)
        } else {
            let joined: Vec<&str> = items.iter().map(String::as_str).collect();
            format!("{}: {}\n", label, joined.join(", "))
        }
    }

    let mut out = line("Saved opportunities", &session.saved_opportunities);
    out.push_str(&line("Enrolled courses", &session.enrolled_courses));
    out.push_str(&line("Completed skills", &session.completed_skills));
    out
}
