//! Interactive session loop

use crate::config::DEFAULT_PROMPT;
use crate::error::Result;
use crate::history::HistoryStore;
use crate::render;
use crate::shell::commands::Commands;
use crate::shell::editor::{LineSource, ReadEvent};
use crate::shell::parser::parse_input;
use crate::shell::{Command, HISTORY_DISPLAY_LIMIT};
use parking_lot::RwLock;
use std::io::Write;
use std::sync::Arc;

/// What the loop does after handling a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Exit,
}

/// Reads lines, records them in history and dispatches commands
pub struct Session<S, W> {
    input: S,
    output: W,
    history: Arc<RwLock<HistoryStore>>,
    commands: Commands,
    prompt: String,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(
        input: S,
        output: W,
        history: Arc<RwLock<HistoryStore>>,
        commands: Commands,
    ) -> Self {
        Self {
            input,
            output,
            history,
            commands,
            prompt: DEFAULT_PROMPT.to_string(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Run until `exit`/`quit` or until input closes
    pub async fn run(&mut self) -> Result<()> {
        loop {
            match self.input.read_line(&self.prompt) {
                ReadEvent::Line(line) => {
                    if self.handle_line(&line).await? == ControlFlow::Exit {
                        break;
                    }
                }
                ReadEvent::Interrupted => continue,
                ReadEvent::Eof => break,
                ReadEvent::Failed(message) => {
                    tracing::warn!(error = %message, "Input closed unexpectedly");
                    break;
                }
            }
        }

        self.output.flush()?;
        Ok(())
    }

    /// Record, parse and dispatch one input line
    pub async fn handle_line(&mut self, line: &str) -> Result<ControlFlow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(ControlFlow::Continue);
        }

        self.history.write().add(line);
        self.input.remember(line);

        let parsed = parse_input(line);
        let Some(command) = parsed.command else {
            return Ok(ControlFlow::Continue);
        };

        match command {
            Command::Exit | Command::Quit => return Ok(ControlFlow::Exit),
            Command::Help => {
                let help = self.commands.help();
                self.print(&help)?;
            }
            Command::History => {
                let text = render::render_history(self.history.read().recent(HISTORY_DISPLAY_LIMIT));
                self.print(&text)?;
            }
            Command::Search | Command::Suggest if parsed.args.is_empty() => {
                self.print(&render::render_usage(command))?;
            }
            Command::Search => {
                let result = self.commands.search(&parsed.args).await;
                self.print_result(result)?;
            }
            Command::Suggest => {
                let result = self.commands.suggest(&parsed.args).await;
                self.print_result(result)?;
            }
        }

        Ok(ControlFlow::Continue)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn print_result(&mut self, result: Result<String>) -> Result<()> {
        match result {
            Ok(text) => self.print(&text),
            Err(e) => {
                tracing::debug!(error = %e, "Command failed");
                self.print(&render::render_error(&e))
            }
        }
    }

    pub fn history(&self) -> Arc<RwLock<HistoryStore>> {
        Arc::clone(&self.history)
    }

    /// Consume the session, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }
}
