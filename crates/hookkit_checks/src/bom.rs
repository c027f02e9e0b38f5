//! Byte-order mark detection.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use hookkit_core::{CoreError, HookReport};

use crate::error::CheckResult;

/// A byte-order mark found at the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bom {
    Utf32Le,
    Utf32Be,
    Utf16Le,
    Utf16Be,
    Utf8,
}

impl Bom {
    /// Classify the first bytes of a file.
    ///
    /// UTF-32 is checked before UTF-16 because the UTF-16 LE mark is a prefix
    /// of the UTF-32 LE mark.
    pub fn detect(head: &[u8]) -> Option<Self> {
        if head.starts_with(&[0xFF, 0xFE, 0x00, 0x00]) {
            Some(Bom::Utf32Le)
        } else if head.starts_with(&[0x00, 0x00, 0xFE, 0xFF]) {
            Some(Bom::Utf32Be)
        } else if head.starts_with(&[0xFF, 0xFE]) {
            Some(Bom::Utf16Le)
        } else if head.starts_with(&[0xFE, 0xFF]) {
            Some(Bom::Utf16Be)
        } else if head.starts_with(&[0xEF, 0xBB, 0xBF]) {
            Some(Bom::Utf8)
        } else {
            None
        }
    }

    /// Prime contributed to the exit code by each file with this mark.
    pub fn factor(self) -> u8 {
        match self {
            Bom::Utf32Le => 13,
            Bom::Utf32Be => 11,
            Bom::Utf16Le => 7,
            Bom::Utf16Be => 5,
            Bom::Utf8 => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Bom::Utf32Le => "UTF-32 BOM (LE)",
            Bom::Utf32Be => "UTF-32 BOM (BE)",
            Bom::Utf16Le => "UTF-16 BOM (LE)",
            Bom::Utf16Be => "UTF-16 BOM (BE)",
            Bom::Utf8 => "UTF-8 BOM",
        }
    }
}

/// Detect the byte-order mark of a file, reading at most four bytes.
pub fn detect_bom(path: &Path) -> CheckResult<Option<Bom>> {
    let file = File::open(path).map_err(|e| CoreError::read(path, e))?;
    let mut head = Vec::with_capacity(4);
    file.take(4)
        .read_to_end(&mut head)
        .map_err(|e| CoreError::read(path, e))?;
    Ok(Bom::detect(&head))
}

/// Check files for byte-order marks.
///
/// The exit code is 0 when no file has a mark, otherwise the product of the
/// marks' factors modulo 256, so different mixes of marks give different codes.
pub fn check_boms<P: AsRef<Path>>(paths: &[P]) -> CheckResult<HookReport> {
    let mut report = HookReport::pass();
    let mut product: u8 = 1;
    let mut found = false;

    for path in paths {
        let path = path.as_ref();
        match detect_bom(path)? {
            Some(bom) => {
                found = true;
                product = product.wrapping_mul(bom.factor());
                report.push(format!("{}: has a {}", path.display(), bom.label()));
            }
            None => debug!("No BOM in {}", path.display()),
        }
    }

    if found {
        report.exit_code = product;
    }
    Ok(report)
}
