//! Interactive shell: input parsing, completion and the session loop

pub mod commands;
pub mod completer;
pub mod editor;
pub mod parser;
pub mod session;

pub use commands::Commands;
pub use completer::{complete, Completion, CompletionCandidate};
pub use editor::{LineEditor, LineSource, ReadEvent};
pub use parser::{parse_input, ParsedCommand};
pub use session::{ControlFlow, Session};

/// Number of entries printed by the `history` command
pub const HISTORY_DISPLAY_LIMIT: usize = 20;

/// Commands understood by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Search,
    Suggest,
    Help,
    History,
    Exit,
    Quit,
}

impl Command {
    /// All commands in completion order
    pub const ALL: [Command; 6] = [
        Command::Search,
        Command::Suggest,
        Command::Help,
        Command::History,
        Command::Exit,
        Command::Quit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Command::Search => "search",
            Command::Suggest => "suggest",
            Command::Help => "help",
            Command::History => "history",
            Command::Exit => "exit",
            Command::Quit => "quit",
        }
    }

    /// Match a keyword case-insensitively
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| word.eq_ignore_ascii_case(c.as_str()))
    }

    /// Commands whose argument is a domain
    pub fn takes_domain(self) -> bool {
        matches!(self, Command::Search | Command::Suggest)
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_keyword() {
        assert_eq!(Command::from_keyword("search"), Some(Command::Search));
        assert_eq!(Command::from_keyword("QUIT"), Some(Command::Quit));
        assert_eq!(Command::from_keyword("History"), Some(Command::History));
        assert_eq!(Command::from_keyword("find"), None);
        assert_eq!(Command::from_keyword(""), None);
    }

    #[test]
    fn test_takes_domain() {
        assert!(Command::Search.takes_domain());
        assert!(Command::Suggest.takes_domain());
        assert!(!Command::Help.takes_domain());
    }

    #[test]
    fn test_display() {
        assert_eq!(Command::Suggest.to_string(), "suggest");
    }
}
