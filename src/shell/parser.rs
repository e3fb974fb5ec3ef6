//! Input line parsing

use crate::shell::Command;

/// A single input line split into a command and its argument
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCommand {
    /// `None` only for blank input
    pub command: Option<Command>,
    /// Remaining words joined with single spaces
    pub args: String,
}

impl ParsedCommand {
    /// Command keyword as typed by the user, or "" for blank input
    pub fn command_str(&self) -> &'static str {
        self.command.map_or("", Command::as_str)
    }
}

/// Split a raw line into a command and argument
///
/// Lines that do not start with a known command are treated as a search for
/// the whole line.
pub fn parse_input(input: &str) -> ParsedCommand {
    let input = input.trim();
    let mut words = input.split_whitespace();

    let Some(first) = words.next() else {
        return ParsedCommand::default();
    };

    match Command::from_keyword(first) {
        Some(command) => ParsedCommand {
            command: Some(command),
            args: words.collect::<Vec<_>>().join(" "),
        },
        None => ParsedCommand {
            command: Some(Command::Search),
            args: input.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(input: &str) -> (&'static str, String) {
        let p = parse_input(input);
        (p.command_str(), p.args)
    }

    #[test]
    fn test_blank_input() {
        for input in ["", "   ", "\t \n"] {
            assert_eq!(parse_input(input), ParsedCommand::default());
            assert_eq!(parse_input(input).command_str(), "");
        }
    }

    #[test]
    fn test_known_commands() {
        let cases = [
            ("search example.com", "search", "example.com"),
            ("suggest example", "suggest", "example"),
            ("help", "help", ""),
            ("history", "history", ""),
            ("exit", "exit", ""),
            ("quit", "quit", ""),
            ("SEARCH Example.COM", "search", "Example.COM"),
            ("  search   a.com    b.com  ", "search", "a.com b.com"),
        ];

        for (input, command, args) in cases {
            let p = parse_input(input);
            assert_eq!(p.command_str(), command, "input: {:?}", input);
            assert_eq!(p.args, args, "input: {:?}", input);
        }
    }

    #[test]
    fn test_default_search_keeps_whole_line() {
        let p = parse_input("example.com");
        assert_eq!(p.command, Some(Command::Search));
        assert_eq!(p.args, "example.com");

        let p = parse_input("  my  cool site  ");
        assert_eq!(p.command, Some(Command::Search));
        assert_eq!(p.args, "my  cool site");
    }

    #[test]
    fn test_command_prefix_is_not_a_command() {
        assert_eq!(parsed("searching foo"), ("search", "searching foo".to_string()));
        assert_eq!(parsed("helpme"), ("search", "helpme".to_string()));
    }
}
