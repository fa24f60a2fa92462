//! CSV report of generated invite links.

use chrono::{DateTime, Utc};
use serde::Serialize;
use telegram_bot::DbotError;

const HEADER: [&str; 3] = ["email", "invite_link", "expires"];
const EXPIRES_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// One report line: an issued link, or a failure marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InviteRow {
    pub email: String,
    pub invite_link: String,
    pub expires: String,
}

impl InviteRow {
    pub fn issued(email: impl Into<String>, invite_link: impl Into<String>, expires: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            invite_link: invite_link.into(),
            expires: expires.format(EXPIRES_FORMAT).to_string(),
        }
    }

    pub fn failed(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            invite_link: "ERROR".to_string(),
            expires: "N/A".to_string(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.invite_link == "ERROR"
    }
}

fn report_error(e: impl std::fmt::Display) -> DbotError {
    DbotError::FileProcessing(format!("CSV report: {}", e))
}

/// Renders rows as CSV (CRLF line ends) under an `email,invite_link,expires` header.
pub fn render_csv(rows: &[InviteRow]) -> Result<Vec<u8>, DbotError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());
    writer.write_record(HEADER).map_err(report_error)?;
    for row in rows {
        writer.serialize(row).map_err(report_error)?;
    }
    writer.into_inner().map_err(report_error)
}

/// `invites_<YYYYmmdd_HHMMSS>.csv`
pub fn report_file_name(at: DateTime<Utc>) -> String {
    format!("invites_{}.csv", at.format("%Y%m%d_%H%M%S"))
}
