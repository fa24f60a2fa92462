//! Email list parsing for batch invites.

use telegram_bot::DbotError;

/// Parses an uploaded file into one address per non-blank line.
///
/// Lines are trimmed and a leading UTF-8 BOM is ignored. Addresses are not validated; the
/// file must be UTF-8 and contain at least one address.
pub fn parse_emails(bytes: &[u8]) -> Result<Vec<String>, DbotError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| DbotError::FileProcessing(format!("file is not valid UTF-8: {}", e)))?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let emails: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if emails.is_empty() {
        return Err(DbotError::FileProcessing(
            "file contains no email addresses".to_string(),
        ));
    }
    Ok(emails)
}
