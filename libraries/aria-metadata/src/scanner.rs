//! Library scanner
//!
//! Recursively discovers supported audio files under a root directory and
//! reads each into a [`Track`]. Hidden entries (dotfiles and dot-directories)
//! are skipped, and files the reader cannot parse are logged and skipped
//! rather than failing the whole scan.

use crate::error::{MetadataError, Result};
use crate::format::is_audio_file;
use crate::reader::LoftyTrackReader;
use aria_core::{ScanProgress, Track};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Audio library scanner
pub struct AudioScanner {
    reader: LoftyTrackReader,
}

impl AudioScanner {
    /// Create a new scanner
    pub fn new() -> Self {
        Self {
            reader: LoftyTrackReader::new(),
        }
    }

    /// Scan `root` for audio files
    ///
    /// Returns the tracks that were read successfully, in discovery order.
    /// Progress updates go out on `progress_tx` when provided: one at start,
    /// one per processed file, one at completion.
    pub async fn scan(
        &self,
        root: &Path,
        progress_tx: Option<mpsc::Sender<ScanProgress>>,
    ) -> Result<Vec<Track>> {
        if !root.exists() {
            return Err(MetadataError::FileNotFound(root.display().to_string()));
        }

        if let Some(ref tx) = progress_tx {
            let _ = tx.send(ScanProgress::started(root.to_path_buf())).await;
        }

        let files = self.discover_files(root);
        let total = files.len();
        debug!(root = %root.display(), total, "scanning audio library");

        let mut tracks = Vec::with_capacity(total);
        for (index, path) in files.into_iter().enumerate() {
            match self.reader.read(&path) {
                Ok(track) => tracks.push(track),
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable audio file");
                }
            }

            if let Some(ref tx) = progress_tx {
                let _ = tx
                    .send(ScanProgress {
                        scanned: index + 1,
                        total: Some(total),
                        current_path: Some(path),
                        scanning: true,
                    })
                    .await;
            }
        }

        if let Some(ref tx) = progress_tx {
            let _ = tx.send(ScanProgress::finished(total)).await;
        }

        Ok(tracks)
    }

    /// Discover supported audio files under `root`, recursively
    fn discover_files(&self, root: &Path) -> Vec<PathBuf> {
        if root.is_file() {
            return if is_audio_file(root) {
                vec![root.to_path_buf()]
            } else {
                Vec::new()
            };
        }

        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            // Keep the root itself even if it lives in a dot-directory.
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().is_file() && is_audio_file(entry.path()))
            .map(|entry| entry.into_path())
            .collect()
    }
}

impl Default for AudioScanner {
    fn default() -> Self {
        Self::new()
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}
