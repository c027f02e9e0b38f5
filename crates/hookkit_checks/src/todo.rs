//! Forbidden marker scanning (TODO, FIXME, XXX).

use std::collections::BTreeSet;
use std::path::Path;

use glob::Pattern;
use tracing::debug;

use hookkit_core::{CoreError, HookReport};

use crate::error::CheckResult;

pub const DEFAULT_TAGS: &[&str] = &["TODO", "FIXME", "XXX"];

/// Scans file content for forbidden markers.
#[derive(Debug, Clone)]
pub struct TodoScanner {
    tags: BTreeSet<String>,
    exceptions: Vec<String>,
    patterns: Vec<Pattern>,
}

impl Default for TodoScanner {
    fn default() -> Self {
        Self::new(&[], &[])
    }
}

impl TodoScanner {
    /// Create a scanner. Empty `tags` means [`DEFAULT_TAGS`]. `except_in`
    /// holds file base names allowed to contain markers; entries are also
    /// tried as glob patterns.
    pub fn new(tags: &[String], except_in: &[String]) -> Self {
        let tags = if tags.is_empty() {
            DEFAULT_TAGS.iter().map(|t| t.to_string()).collect()
        } else {
            tags.iter().cloned().collect()
        };
        let patterns = except_in
            .iter()
            .filter_map(|name| Pattern::new(name).ok())
            .collect();
        Self {
            tags,
            exceptions: except_in.to_vec(),
            patterns,
        }
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// True when the file's base name is on the exception list.
    pub fn is_excepted(&self, path: &Path) -> bool {
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => return false,
        };
        self.exceptions.iter().any(|e| e == name) || self.patterns.iter().any(|p| p.matches(name))
    }

    /// Scan one file's content, appending diagnostics to `report`.
    ///
    /// Returns the number of violations: one per line containing a tag. An
    /// excepted file yields no violations and one notice per tag it contains.
    pub fn scan(&self, path: &Path, content: &str, report: &mut HookReport) -> usize {
        let excepted = self.is_excepted(path);
        let mut violations = 0;

        for tag in &self.tags {
            for line in content.lines() {
                if !line.contains(tag.as_str()) {
                    continue;
                }
                if excepted {
                    report.push(format!(
                        "{}: contains {}, but is on the exception list",
                        path.display(),
                        tag
                    ));
                    break;
                }
                violations += 1;
                report.push(format!("{}: contains {}", path.display(), tag));
            }
        }
        violations
    }

    /// Scan files. The exit code is the number of violations, capped at 255.
    pub fn check_files<P: AsRef<Path>>(&self, paths: &[P]) -> CheckResult<HookReport> {
        let mut report = HookReport::pass();
        let mut total = 0usize;

        for path in paths {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path).map_err(|e| CoreError::read(path, e))?;
            let found = self.scan(path, &content, &mut report);
            debug!("{} marker(s) in {}", found, path.display());
            total += found;
        }

        report.exit_code = u8::try_from(total).unwrap_or(u8::MAX);
        Ok(report)
    }
}
