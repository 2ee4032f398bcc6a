//! Play queue
//!
//! Ordered track sequence plus the index of the current selection. Pure data
//! structure, no I/O; exclusively owned by the
//! [`PlaybackManager`](crate::PlaybackManager), never seen by the engine.
//!
//! Navigation is circular: next from the last track wraps to the first and
//! vice versa. No operation errors; every edge case (empty queue, out-of-range
//! start index) degrades to a defined "no current item" state.

use aria_core::Track;

/// Play queue with circular navigation
#[derive(Debug, Clone, Default)]
pub struct TrackQueue {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl TrackQueue {
    /// Create a new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale
    ///
    /// A `start_index` outside `[0, len)` (or an empty track list) resolves
    /// to no current item. Duplicate tracks are permitted.
    pub fn set_queue(&mut self, tracks: Vec<Track>, start_index: usize) {
        self.current = if start_index < tracks.len() {
            Some(start_index)
        } else {
            None
        };
        self.tracks = tracks;
    }

    /// Get the current track
    ///
    /// Defensive about stale indices: returns `None` rather than panicking if
    /// the index somehow fell out of range.
    pub fn current(&self) -> Option<&Track> {
        self.current.and_then(|index| self.tracks.get(index))
    }

    /// Index of the current track
    pub fn current_index(&self) -> Option<usize> {
        self.current.filter(|index| *index < self.tracks.len())
    }

    /// Peek at the next track without moving
    pub fn peek_next(&self) -> Option<&Track> {
        let index = self.current_index()?;
        self.tracks.get(self.wrap_forward(index))
    }

    /// Peek at the previous track without moving
    pub fn peek_previous(&self) -> Option<&Track> {
        let index = self.current_index()?;
        self.tracks.get(self.wrap_backward(index))
    }

    /// Move to the next track, wrapping from last to first
    ///
    /// Returns `false` iff the queue is empty or nothing is selected. A
    /// single-element queue wraps to itself and still returns `true`.
    pub fn advance(&mut self) -> bool {
        match self.current_index() {
            Some(index) => {
                self.current = Some(self.wrap_forward(index));
                true
            }
            None => false,
        }
    }

    /// Move to the previous track, wrapping from first to last
    pub fn retreat(&mut self) -> bool {
        match self.current_index() {
            Some(index) => {
                self.current = Some(self.wrap_backward(index));
                true
            }
            None => false,
        }
    }

    /// Whether the current track is the first in the queue
    pub fn is_first(&self) -> bool {
        !self.tracks.is_empty() && self.current_index() == Some(0)
    }

    /// Whether the current track is the last in the queue
    pub fn is_last(&self) -> bool {
        !self.tracks.is_empty() && self.current_index() == Some(self.tracks.len() - 1)
    }

    /// All tracks in play order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks in the queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    fn wrap_forward(&self, index: usize) -> usize {
        if index + 1 == self.tracks.len() {
            0
        } else {
            index + 1
        }
    }

    fn wrap_backward(&self, index: usize) -> usize {
        if index == 0 {
            self.tracks.len() - 1
        } else {
            index - 1
        }
    }
}
