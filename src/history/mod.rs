//! Persistent input history
//!
//! Every accepted line is kept in a deduplicated, most-recently-used list
//! that survives across sessions and feeds command recall and completion.

mod store;

pub use store::HistoryStore;

use crate::error::{Result, ShellError};
use std::path::PathBuf;

/// Maximum number of entries kept in history
pub const MAX_HISTORY_ENTRIES: usize = 1000;

/// Directory under the user config dir that holds domainshell state
pub const APP_DIR_NAME: &str = "domainshell";

/// File name of the history file inside [`APP_DIR_NAME`]
pub const HISTORY_FILE_NAME: &str = "history.txt";

/// Keywords that never count as a domain when deriving completion candidates
const NON_DOMAIN_KEYWORDS: &[&str] = &["search", "suggest", "exit", "quit"];

/// Resolve `<user-config-dir>/domainshell/history.txt`
pub fn default_history_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ShellError::config("Could not determine the user config directory"))?;
    Ok(config_dir.join(APP_DIR_NAME).join(HISTORY_FILE_NAME))
}

/// Whether the last token of a history line should be offered as a domain
pub(crate) fn looks_like_domain(token: &str) -> bool {
    token.contains('.')
        && !NON_DOMAIN_KEYWORDS
            .iter()
            .any(|kw| token.eq_ignore_ascii_case(kw))
}
