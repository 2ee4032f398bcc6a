/// Scan progress domain type
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Progress of a library scan
///
/// Emitted by the scanner at scan start, after each processed file, and once
/// at completion (with `scanning = false` and a known `total`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanProgress {
    /// Number of files scanned so far
    pub scanned: usize,

    /// Total number of files, once known
    pub total: Option<usize>,

    /// Path currently being scanned
    pub current_path: Option<PathBuf>,

    /// Whether the scan is still running
    pub scanning: bool,
}

impl ScanProgress {
    /// Progress value for a scan that has just started
    pub fn started(root: PathBuf) -> Self {
        Self {
            scanned: 0,
            total: None,
            current_path: Some(root),
            scanning: true,
        }
    }

    /// Progress value for a finished scan
    pub fn finished(scanned: usize) -> Self {
        Self {
            scanned,
            total: Some(scanned),
            current_path: None,
            scanning: false,
        }
    }
}
