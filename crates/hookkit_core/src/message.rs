//! Commit message files.
//!
//! Lines are kept together with their terminators so a rewritten message
//! differs from the original only where a hook changed it.

use std::path::{Path, PathBuf};

use crate::error::{CoreError, CoreResult};

/// A commit message file loaded into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitMessage {
    path: PathBuf,
    lines: Vec<String>,
}

impl CommitMessage {
    /// Read a commit message file as UTF-8.
    pub fn read<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| CoreError::read(path, e))?;
        Ok(Self::parse(path, &content))
    }

    /// Build a message from in-memory content.
    pub fn parse<P: AsRef<Path>>(path: P, content: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lines: content.split_inclusive('\n').map(str::to_string).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True when the file has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Text of a line without its terminator.
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(|l| strip_terminator(l))
    }

    /// All lines without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|l| strip_terminator(l))
    }

    /// The subject line (first line) without its terminator.
    pub fn subject(&self) -> Option<&str> {
        self.line(0)
    }

    /// Replace the subject text, keeping the original terminator.
    pub fn set_subject(&mut self, subject: &str) {
        match self.lines.first_mut() {
            Some(first) => {
                let text_len = strip_terminator(first.as_str()).len();
                let terminator = first[text_len..].to_string();
                *first = format!("{}{}", subject, terminator);
            }
            None => self.lines.push(subject.to_string()),
        }
    }

    /// Full message content.
    pub fn content(&self) -> String {
        self.lines.concat()
    }

    /// Write the message back to the file it was read from.
    pub fn write(&self) -> CoreResult<()> {
        std::fs::write(&self.path, self.content()).map_err(|e| CoreError::write(&self.path, e))
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
