//! Slash-command parsing for incoming text and captions.

/// A parsed `/command args...` invocation. `name` is lower-cased without the leading slash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub args: String,
}

/// Parses `text` as a bot command.
///
/// Returns `None` when the text does not start with `/`, or when the command carries an
/// `@botname` suffix naming a different bot. The suffix is accepted when `bot_username` is
/// unknown.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let rest = text.trim_start().strip_prefix('/')?;
    let (head, args) = match rest.find(char::is_whitespace) {
        Some(idx) => (&rest[..idx], rest[idx..].trim()),
        None => (rest, ""),
    };
    let (name, target) = match head.split_once('@') {
        Some((name, target)) => (name, Some(target)),
        None => (head, None),
    };
    if name.is_empty() {
        return None;
    }
    if let (Some(target), Some(username)) = (target, bot_username) {
        if !target.eq_ignore_ascii_case(username) {
            return None;
        }
    }
    Some(Command {
        name: name.to_lowercase(),
        args: args.to_string(),
    })
}

/// Returns true if `text` is the command `name` (case-insensitive, `@suffix` allowed).
pub fn is_command(text: &str, name: &str, bot_username: Option<&str>) -> bool {
    parse_command(text, bot_username)
        .map(|c| c.name == name.to_lowercase())
        .unwrap_or(false)
}

/// Returns true if `/name` occurs anywhere in `text` (plain substring, case-sensitive).
/// Used for captions, where the command may sit inside other text.
pub fn contains_command(text: &str, name: &str) -> bool {
    !name.is_empty() && text.contains(&format!("/{}", name))
}
