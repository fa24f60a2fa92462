//! # telegram_invite_bot
//!
//! Invite-link service for one target group: `/invite` returns a single permanent link; a text
//! file of email addresses captioned `/invite` returns a CSV with one single-use, expiring link
//! per address.

mod assembly;
mod config;
pub mod emails;
pub mod handlers;
pub mod report;

pub use assembly::{build_invite_bot_only, build_invite_handler, run_bot_with_invites, SERVICE_NAME};
pub use config::{InviteConfig, DEFAULT_EXPIRE_DAYS, DEFAULT_MEMBER_LIMIT};
pub use emails::parse_emails;
pub use handlers::{
    batch_link_name, InviteHandler, MAX_LINK_NAME_CHARS, MSG_INVITE_FAILED, SINGLE_INVITE_NAME,
};
pub use report::{render_csv, report_file_name, InviteRow};
