//! Core types for playback management

use crate::error::PlaybackError;
use aria_core::Track;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the playback engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Interval between periodic progress refreshes (default: 500ms)
    pub progress_interval: Duration,

    /// Volume used while audio focus is transiently lost with ducking
    /// permitted (default: 0.2)
    pub duck_volume: f32,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            progress_interval: Duration::from_millis(500),
            duck_volume: 0.2,
        }
    }
}

/// Pipeline status as reported by the underlying media pipeline
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    /// No media loaded
    #[default]
    Idle,

    /// Media loaded, buffering before playback can proceed
    Buffering,

    /// Ready to play (or playing)
    Ready,

    /// Playback reached the end of the media
    Ended,
}

/// Point-in-time state of the playback pipeline
///
/// Fully recomputed from the pipeline's live accessors on every engine event
/// or progress tick, never patched incrementally. The retained `error` is the
/// last one observed; a refresh never clears it on its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Whether the pipeline is producing sound
    pub playing: bool,

    /// Current playback position in milliseconds
    pub position_ms: u64,

    /// Duration of the loaded media in milliseconds (0 when unknown)
    pub duration_ms: u64,

    /// Buffered position in milliseconds
    pub buffered_position_ms: u64,

    /// Pipeline status
    pub status: PipelineStatus,

    /// Last playback error, if any
    pub error: Option<PlaybackError>,
}

/// Playback state observed by the presentation layer
///
/// Produced by [`PlaybackManager`](crate::PlaybackManager) by merging the
/// engine's [`PlaybackSnapshot`] with the queue's identity and index
/// information. This is the only entity the presentation layer sees.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Currently selected track
    pub current_track: Option<Track>,

    /// Whether playback is active
    pub is_playing: bool,

    /// Current playback position in milliseconds
    pub position_ms: u64,

    /// Duration of the current track in milliseconds
    pub duration_ms: u64,

    /// Buffered position in milliseconds
    pub buffered_position_ms: u64,

    /// Pipeline status
    pub status: PipelineStatus,

    /// Last playback error, if any
    pub error: Option<PlaybackError>,

    /// The play queue in play order
    pub queue: Vec<Track>,

    /// Index of the current track within `queue` (`None` when nothing is
    /// selected)
    pub current_index: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.progress_interval, Duration::from_millis(500));
        assert_eq!(config.duck_volume, 0.2);
    }

    #[test]
    fn default_state_is_empty() {
        let state = PlaybackState::default();
        assert!(state.current_track.is_none());
        assert!(!state.is_playing);
        assert_eq!(state.position_ms, 0);
        assert_eq!(state.duration_ms, 0);
        assert!(state.queue.is_empty());
        assert_eq!(state.current_index, None);
        assert_eq!(state.status, PipelineStatus::Idle);
    }
}
