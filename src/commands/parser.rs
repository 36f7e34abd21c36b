//! Input line tokenizing and command keywords.

/// A command keyword recognised by the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Delete,
    Search,
    /// `close` or `exit`
    Exit,
    /// Anything else, kept as typed (lower-cased)
    Unknown(String),
}

impl Command {
    /// Map a lower-cased keyword onto a command.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "delete" => Self::Delete,
            "search" => Self::Search,
            "close" | "exit" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The keyword used in logs and argument errors.
    pub fn keyword(&self) -> &str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::Delete => "delete",
            Self::Search => "search",
            Self::Exit => "exit",
            Self::Unknown(keyword) => keyword,
        }
    }
}

/// Split a line into a lower-cased command word and its arguments.
///
/// Tokens are separated by any run of whitespace. Returns `None` for a
/// blank line.
///
/// # Example
///
/// ```
/// use contact_book::commands::parse_input;
///
/// let (command, args) = parse_input("  ADD Carol 1234567890  ").unwrap();
/// assert_eq!(command, "add");
/// assert_eq!(args, vec!["Carol", "1234567890"]);
/// ```
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
