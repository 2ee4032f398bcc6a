/// Track reader implementation using lofty
use crate::error::{MetadataError, Result};
use aria_core::Track;
use chrono::{DateTime, Utc};
use lofty::{AudioFile, TaggedFileExt};
use std::path::Path;

/// Reads one audio file into a [`Track`] using the lofty library
///
/// Tag fields that are absent fall back to sensible defaults: the title
/// falls back to the file stem, the artist to an empty string. Duration
/// comes from the decoded stream properties, not from tags.
pub struct LoftyTrackReader;

impl LoftyTrackReader {
    /// Create a new track reader
    pub fn new() -> Self {
        Self
    }

    /// Read the file at `path` into a [`Track`]
    pub fn read(&self, path: &Path) -> Result<Track> {
        if !path.exists() {
            return Err(MetadataError::FileNotFound(path.display().to_string()));
        }

        let tagged_file = lofty::read_from_path(path)?;
        let duration_ms = tagged_file.properties().duration().as_millis() as u64;

        let mut title = None;
        let mut artist = None;
        let mut album = None;

        // lofty 0.18 API - iterate through the primary tag's items
        if let Some(tag) = tagged_file.primary_tag().or_else(|| tagged_file.tags().first()) {
            for item in tag.items() {
                match item.key() {
                    lofty::ItemKey::TrackTitle => {
                        title = item.value().text().map(|s| s.to_string());
                    }
                    lofty::ItemKey::TrackArtist => {
                        artist = item.value().text().map(|s| s.to_string());
                    }
                    lofty::ItemKey::AlbumTitle => {
                        album = item.value().text().map(|s| s.to_string());
                    }
                    _ => {}
                }
            }
        }

        let title = title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Unknown")
                .to_string()
        });

        let mut track = Track::new(title, path.to_path_buf());
        track.artist = artist.unwrap_or_default();
        track.album = album;
        track.duration_ms = duration_ms;

        let file_metadata = std::fs::metadata(path)?;
        track.file_size = file_metadata.len();
        if let Ok(modified) = file_metadata.modified() {
            track.added_at = DateTime::<Utc>::from(modified);
        }

        Ok(track)
    }
}

impl Default for LoftyTrackReader {
    fn default() -> Self {
        Self::new()
    }
}
