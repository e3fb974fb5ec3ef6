//! History store backed by a plain text file

use crate::error::{Result, ShellError};
use crate::history::{default_history_path, looks_like_domain, MAX_HISTORY_ENTRIES};
use std::collections::HashSet;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Ordered, deduplicated list of past input lines
///
/// The most recently used entry is always last. When a backing path is set,
/// every mutation rewrites the whole file.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    entries: Vec<String>,
}

impl HistoryStore {
    /// Open the history file in the user config directory
    pub fn open() -> Result<Self> {
        Self::open_at(default_history_path()?)
    }

    /// Open a history file at an explicit location
    ///
    /// Parent directories are created. An unreadable file is not an error;
    /// history just starts empty.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShellError::io(
                    format!("Failed to create history directory: {}", e),
                    Some(parent.to_string_lossy().to_string()),
                )
            })?;
        }

        let mut store = Self {
            path: Some(path),
            entries: Vec::new(),
        };

        if let Err(e) = store.load() {
            tracing::debug!(error = %e, "Ignoring unreadable history file");
            store.entries.clear();
        }

        Ok(store)
    }

    /// Open persistent history, falling back to a session-only store
    ///
    /// `None` selects the default location. When the location cannot be
    /// resolved or created, the store lives in memory and the error is
    /// returned alongside it for the caller to report.
    pub fn open_or_in_memory(path: Option<&Path>) -> (Self, Option<ShellError>) {
        let opened = match path {
            Some(path) => Self::open_at(path),
            None => Self::open(),
        };

        match opened {
            Ok(store) => (store, None),
            Err(e) => {
                tracing::debug!(error = %e, "History is session-only");
                (Self::in_memory(), Some(e))
            }
        }
    }

    /// History that lives only for this session
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Replace the entries with the contents of the backing file
    pub fn load(&mut self) -> Result<()> {
        let Some(path) = self.path.clone() else {
            return Ok(());
        };

        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(ShellError::io(
                    e.to_string(),
                    Some(path.to_string_lossy().to_string()),
                ))
            }
        };

        self.entries.clear();
        for raw in bytes.split(|b| *b == b'\n') {
            let line = String::from_utf8_lossy(raw);
            let line = line.trim();
            if !line.is_empty() {
                self.push(line);
            }
        }

        tracing::debug!(entries = self.entries.len(), path = %path.display(), "History loaded");
        Ok(())
    }

    /// Overwrite the backing file, one entry per line
    pub fn save(&self) -> Result<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };

        let io_err = |e: std::io::Error| {
            ShellError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        };

        let file = std::fs::File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        for entry in &self.entries {
            writeln!(writer, "{}", entry).map_err(io_err)?;
        }
        writer.flush().map_err(io_err)
    }

    /// Record a line as the most recent entry and persist
    pub fn add(&mut self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        self.push(line);

        if let Err(e) = self.save() {
            tracing::debug!(error = %e, "Failed to save history");
        }
    }

    fn push(&mut self, line: &str) {
        if let Some(pos) = self.entries.iter().position(|e| e == line) {
            self.entries.remove(pos);
        }
        self.entries.push(line.to_string());

        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let excess = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(..excess);
        }
    }

    /// All entries, oldest first
    pub fn items(&self) -> &[String] {
        &self.entries
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(count);
        &self.entries[start..]
    }

    /// Domains seen as the last word of past entries, in first-seen order
    pub fn domains(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter_map(|entry| entry.split_whitespace().last())
            .filter(|token| looks_like_domain(token))
            .filter(|token| seen.insert(*token))
            .map(str::to_string)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Backing file, if this store persists
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_persistent(&self) -> bool {
        self.path.is_some()
    }
}
