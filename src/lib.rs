//! domainshell - interactive domain availability shell
//!
//! A small REPL for checking whether domains can be registered and for
//! browsing suggested alternatives, with persistent history and tab
//! completion over commands and previously used domains.

pub mod api;
pub mod config;
pub mod error;
pub mod history;
pub mod logging;
pub mod render;
pub mod shell;
pub mod types;

// Re-export commonly used types
pub use api::{ApiClient, DomainApi};
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use history::HistoryStore;
pub use shell::{parse_input, Command, Commands, LineEditor, ParsedCommand, Session};
pub use types::{DomainRecord, LookupResponse};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date stamped in by the release pipeline, if any
pub const BUILD_DATE: Option<&str> = option_env!("DOMAINSHELL_BUILD_DATE");

/// Git commit stamped in by the release pipeline, if any
pub const GIT_COMMIT: Option<&str> = option_env!("DOMAINSHELL_GIT_COMMIT");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
