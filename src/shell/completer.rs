//! Tab completion over commands and previously looked-up domains

use crate::shell::Command;

/// One proposed completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionCandidate {
    /// Full candidate text, e.g. `search` or `example.com`
    pub value: String,
    /// Text to insert at the cursor to finish the word
    pub suffix: String,
}

/// Completions for the word under the cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Completion {
    /// Byte length of the typed prefix shared by every candidate
    pub prefix_len: usize,
    pub candidates: Vec<CompletionCandidate>,
}

impl Completion {
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn suffixes(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.suffix.as_str()).collect()
    }
}

/// Complete the word ending at byte offset `pos` in `line`
///
/// The first word completes against commands and known domains. Arguments of
/// `search`/`suggest` complete against domains only. Anything else gets no
/// completions.
pub fn complete(line: &str, pos: usize, domains: &[String]) -> Completion {
    let Some(text) = line.get(..pos) else {
        return Completion::default();
    };
    if text.is_empty() {
        return Completion::default();
    }

    let start = text
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8());
    let prefix = &text[start..];
    if prefix.is_empty() {
        return Completion::default();
    }

    let prefix_lower = prefix.to_lowercase();
    let is_match = |candidate: &str| candidate.to_lowercase().starts_with(&prefix_lower);

    let mut values: Vec<&str> = Vec::new();
    if text == prefix {
        values.extend(Command::ALL.iter().map(|c| c.as_str()).filter(|c| is_match(*c)));
        values.extend(domains.iter().map(String::as_str).filter(|d| is_match(*d)));
    } else {
        let mut words = text.split_whitespace();
        let first = words.next();
        let has_more = words.next().is_some();
        let takes_domain = first
            .and_then(Command::from_keyword)
            .is_some_and(Command::takes_domain);

        if has_more && takes_domain {
            values.extend(domains.iter().map(String::as_str).filter(|d| is_match(*d)));
        }
    }

    if values.is_empty() {
        return Completion::default();
    }

    let typed_chars = prefix.chars().count();
    let candidates = values
        .into_iter()
        .map(|value| CompletionCandidate {
            value: value.to_string(),
            suffix: value.chars().skip(typed_chars).collect(),
        })
        .collect();

    Completion {
        prefix_len: prefix.len(),
        candidates,
    }
}
