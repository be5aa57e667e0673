//! CLI command handlers for the internpath application.

mod batch;
mod catalog;
mod digest;
mod gap;
mod recommend;
mod session;

pub(crate) use batch::handle_batch_command;
pub(crate) use catalog::handle_courses_command;
pub(crate) use digest::{handle_digest_command, handle_resume_command, handle_suggest_command};
pub(crate) use gap::handle_gap_command;
pub(crate) use recommend::handle_recommend_command;
pub(crate) use session::{
    handle_complete_command, handle_enroll_command, handle_save_command, handle_session_command,
};
