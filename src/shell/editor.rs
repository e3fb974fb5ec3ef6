//! Line input for the session loop
//!
//! [`LineEditor`] wraps rustyline and wires tab completion to the shared
//! history. The session only sees the [`LineSource`] trait so it can be driven
//! from scripted input as well.

use crate::error::Result;
use crate::history::{HistoryStore, MAX_HISTORY_ENTRIES};
use crate::shell::completer::complete;
use parking_lot::RwLock;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::{DefaultHistory, History};
use rustyline::validate::Validator;
use rustyline::{CompletionType, Config, Context, Editor, Helper};
use std::sync::Arc;

/// Outcome of asking for the next input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadEvent {
    Line(String),
    /// Ctrl-C; the partial line is discarded
    Interrupted,
    /// Ctrl-D or closed input
    Eof,
    /// Any other input failure
    Failed(String),
}

/// Source of interactive input lines
pub trait LineSource {
    /// Block until the next line is available
    fn read_line(&mut self, prompt: &str) -> ReadEvent;

    /// Make a submitted line available for recall
    fn remember(&mut self, _line: &str) {}
}

/// rustyline-backed terminal editor with command and domain completion
pub struct LineEditor {
    editor: Editor<ShellHelper, DefaultHistory>,
    history: Arc<RwLock<HistoryStore>>,
}

impl LineEditor {
    /// Create an editor whose recall list starts with the stored history
    pub fn new(history: Arc<RwLock<HistoryStore>>) -> Result<Self> {
        let config = Config::builder()
            .max_history_size(MAX_HISTORY_ENTRIES)?
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .auto_add_history(false)
            .completion_type(CompletionType::List)
            .build();

        let mut editor = Editor::with_config(config)?;
        reseed(editor.history_mut(), history.read().items())?;
        editor.set_helper(Some(ShellHelper {
            history: Arc::clone(&history),
        }));

        Ok(Self { editor, history })
    }
}

/// Replace the recall list with the store's entries
///
/// rustyline only drops consecutive duplicates, while the store moves a
/// repeated line to the end. Rebuilding keeps up-arrow order identical to it.
fn reseed(recall: &mut DefaultHistory, entries: &[String]) -> rustyline::Result<()> {
    recall.clear()?;
    for entry in entries {
        recall.add(entry)?;
    }
    Ok(())
}

impl LineSource for LineEditor {
    fn read_line(&mut self, prompt: &str) -> ReadEvent {
        match self.editor.readline(prompt) {
            Ok(line) => ReadEvent::Line(line),
            Err(ReadlineError::Interrupted) => ReadEvent::Interrupted,
            Err(ReadlineError::Eof) => ReadEvent::Eof,
            Err(e) => ReadEvent::Failed(e.to_string()),
        }
    }

    fn remember(&mut self, _line: &str) {
        let history = self.history.read();
        if let Err(e) = reseed(self.editor.history_mut(), history.items()) {
            tracing::debug!(error = %e, "Failed to refresh editor history");
        }
    }
}

/// Completion helper reading domains from the shared history
struct ShellHelper {
    history: Arc<RwLock<HistoryStore>>,
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let domains = self.history.read().domains();
        let completion = complete(line, pos, &domains);

        // Candidates carry only the missing suffix, so they are inserted at the cursor
        let pairs = completion
            .candidates
            .into_iter()
            .map(|c| Pair {
                display: c.value,
                replacement: c.suffix,
            })
            .collect();

        Ok((pos, pairs))
    }
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {}

impl Helper for ShellHelper {}
