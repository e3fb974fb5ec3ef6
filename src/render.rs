//! Text rendering for lookup results and shell messages
//!
//! Every function here is pure: it takes a value and returns the text to
//! print. Colors come from `console` and are dropped automatically when the
//! output is not a terminal.

use crate::error::ShellError;
use crate::shell::Command;
use crate::types::{DomainRecord, LookupResponse};
use console::style;
use std::fmt::Write;

/// Currency label used by the lookup service prices
const CURRENCY: &str = "Toman";

/// Abbreviate a price: `1.50M`, `250.0K` or the plain number
pub fn format_price(price: i64) -> String {
    if price >= 1_000_000 {
        format!("{:.2}M", price as f64 / 1_000_000.0)
    } else if price >= 1_000 {
        format!("{:.1}K", price as f64 / 1_000.0)
    } else {
        price.to_string()
    }
}

/// Price and tags appended after an available domain
fn record_details(record: &DomainRecord) -> String {
    let mut out = String::new();
    if record.yearly_price() > 0 {
        let price = format!(" ({} {}/year)", format_price(record.yearly_price()), CURRENCY);
        let _ = write!(out, "{}", style(price).white());
    }
    if record.on_sale {
        let _ = write!(out, "{}", style(" [ON SALE]").yellow());
    }
    if record.premium {
        let _ = write!(out, "{}", style(" [PREMIUM]").yellow());
    }
    out
}

/// Availability of the first record in a check response
pub fn render_lookup(response: &LookupResponse) -> String {
    let Some(record) = response.data.first() else {
        return format!("{}\n", style("No data returned").yellow());
    };

    if record.available {
        format!(
            "{}{}\n",
            style(format!("{} is available", record.domain)).green().bold(),
            record_details(record)
        )
    } else {
        let reason = record
            .reason()
            .map(|r| style(format!(" ({})", r)).yellow().to_string())
            .unwrap_or_default();
        format!(
            "{}{}\n",
            style(format!("{} is NOT available", record.domain)).red().bold(),
            reason
        )
    }
}

/// Available alternatives from a suggest response
pub fn render_suggestions(query: &str, response: &LookupResponse) -> String {
    if response.is_empty() {
        return format!("{}\n", style("No suggestions found").yellow());
    }

    let mut out = format!("{}\n", style(format!("Suggestions for {}:", query)).white());
    for record in response.available() {
        let _ = writeln!(
            out,
            "  {}{}",
            style(&record.domain).green().bold(),
            record_details(record)
        );
    }
    out
}

/// Past entries, oldest first
pub fn render_history(entries: &[String]) -> String {
    if entries.is_empty() {
        return format!("{}\n", style("No history").white());
    }

    entries.iter().fold(String::new(), |mut out, entry| {
        let _ = writeln!(out, "   {}", style(entry).white());
        out
    })
}

/// Usage hint for a command that needs a domain argument
pub fn render_usage(command: Command) -> String {
    format!("{}\n", style(format!("Usage: {} <domain>", command)).white())
}

/// Failed lookup or suggestion request
pub fn render_error(error: &ShellError) -> String {
    format!("{}\n", style(error.user_message()).red().bold())
}

/// Command overview
pub fn render_help() -> String {
    let rows = [
        ("<domain>", "Check domain availability (default)"),
        ("search <domain>", "Check domain availability"),
        ("suggest <domain>", "Get domain suggestions"),
        ("history", "Show command history"),
        ("help", "Show this help message"),
        ("exit, quit", "Exit the program"),
    ];

    let mut out = format!("{}\n", style("Available commands:").cyan());
    for (usage, description) in rows {
        let _ = writeln!(out, "  {:<18} - {}", usage, description);
    }
    out.push('\n');
    out
}

/// Version banner for `--version`
pub fn render_version(
    version: &str,
    build_date: Option<&str>,
    git_commit: Option<&str>,
) -> String {
    let mut out = format!("domainshell {}\n", version);
    if let Some(date) = build_date.filter(|d| !d.is_empty()) {
        let _ = writeln!(out, "Build date: {}", date);
    }
    if let Some(commit) = git_commit.filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "Git commit: {}", commit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Prices, RegisterPrices};

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).to_string()
    }

    fn record(domain: &str, available: bool, price: i64) -> DomainRecord {
        DomainRecord {
            available,
            domain: domain.to_string(),
            prices: Prices {
                register: RegisterPrices { one_year: price },
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1000), "1.0K");
        assert_eq!(format_price(250_000), "250.0K");
        assert_eq!(format_price(1_500_000), "1.50M");
    }

    #[test]
    fn test_lookup_available() {
        let mut rec = record("example.com", true, 1_200_000);
        rec.on_sale = true;
        rec.premium = true;
        let out = plain(render_lookup(&LookupResponse { data: vec![rec] }));
        assert_eq!(
            out,
            "example.com is available (1.20M Toman/year) [ON SALE] [PREMIUM]\n"
        );
    }

    #[test]
    fn test_lookup_available_without_price() {
        let out = plain(render_lookup(&LookupResponse {
            data: vec![record("example.com", true, 0)],
        }));
        assert_eq!(out, "example.com is available\n");
    }

    #[test]
    fn test_lookup_taken() {
        let mut rec = record("example.com", false, 0);
        rec.reason = Some("Already registered".to_string());
        let out = plain(render_lookup(&LookupResponse { data: vec![rec] }));
        assert_eq!(out, "example.com is NOT available (Already registered)\n");
    }

    #[test]
    fn test_lookup_empty() {
        let out = plain(render_lookup(&LookupResponse::default()));
        assert_eq!(out, "No data returned\n");
    }

    #[test]
    fn test_suggestions_only_available() {
        let response = LookupResponse {
            data: vec![
                record("example.io", true, 5000),
                record("example.net", false, 0),
                record("example.dev", true, 0),
            ],
        };
        let out = plain(render_suggestions("example", &response));
        assert_eq!(
            out,
            "Suggestions for example:\n  example.io (5.0K Toman/year)\n  example.dev\n"
        );
    }

    #[test]
    fn test_suggestions_empty() {
        let out = plain(render_suggestions("example", &LookupResponse::default()));
        assert_eq!(out, "No suggestions found\n");
    }

    #[test]
    fn test_history() {
        assert_eq!(plain(render_history(&[])), "No history\n");
        let entries = vec!["example.com".to_string(), "help".to_string()];
        assert_eq!(plain(render_history(&entries)), "   example.com\n   help\n");
    }

    #[test]
    fn test_usage_and_help() {
        assert_eq!(plain(render_usage(Command::Search)), "Usage: search <domain>\n");
        assert_eq!(plain(render_usage(Command::Suggest)), "Usage: suggest <domain>\n");

        let help = plain(render_help());
        assert!(help.starts_with("Available commands:"));
        assert!(help.contains("suggest <domain>"));
        assert!(help.contains("exit, quit"));
    }

    #[test]
    fn test_version() {
        assert_eq!(render_version("1.2.3", None, None), "domainshell 1.2.3\n");
        assert_eq!(
            render_version("1.2.3", Some("2024-01-01"), Some("abc123")),
            "domainshell 1.2.3\nBuild date: 2024-01-01\nGit commit: abc123\n"
        );
    }
}
