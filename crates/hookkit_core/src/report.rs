//! Hook reports.

use serde::Serialize;

/// Exit code of a hook that found nothing to complain about.
pub const SUCCESS: u8 = 0;

/// Outcome of running one hook: the process exit code plus the diagnostic
/// lines to show the committer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookReport {
    pub exit_code: u8,
    pub lines: Vec<String>,
}

impl HookReport {
    pub fn pass() -> Self {
        Self::with_code(SUCCESS)
    }

    pub fn fail(exit_code: u8) -> Self {
        Self::with_code(exit_code)
    }

    pub fn with_code(exit_code: u8) -> Self {
        Self {
            exit_code,
            lines: Vec::new(),
        }
    }

    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn passed(&self) -> bool {
        self.exit_code == SUCCESS
    }

    /// Last diagnostic line, if any.
    pub fn last_line(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }

    /// Print every diagnostic line to stdout.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }
}
