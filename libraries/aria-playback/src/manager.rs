//! Playback manager - the public-facing coordination unit
//!
//! Composes the [`TrackQueue`] and the [`PlaybackEngine`]: translates "play
//! the current queue item" into engine calls, turns skip next/previous into
//! queue movement followed by an engine restart, and merges the engine's
//! live snapshots with the queue's identity and index information into the
//! one [`PlaybackState`] stream the presentation layer observes.
//!
//! The queue is exclusively owned here; the engine never sees it.

use crate::engine::PlaybackEngine;
use crate::queue::TrackQueue;
use crate::types::{PlaybackSnapshot, PlaybackState};
use aria_core::Track;
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

enum SkipDirection {
    Next,
    Previous,
}

/// Playback coordinator
///
/// The only component the presentation layer talks to.
pub struct PlaybackManager {
    engine: Arc<PlaybackEngine>,
    queue: Arc<Mutex<TrackQueue>>,
    state_tx: Arc<watch::Sender<PlaybackState>>,
    merge_task: Mutex<Option<JoinHandle<()>>>,
}

impl PlaybackManager {
    /// Create a manager over the given engine and start merging its snapshot
    /// stream into the published state
    pub fn new(engine: PlaybackEngine) -> Self {
        let engine = Arc::new(engine);
        let queue = Arc::new(Mutex::new(TrackQueue::new()));
        let (state_tx, _) = watch::channel(PlaybackState::default());
        let state_tx = Arc::new(state_tx);

        let mut snapshots = engine.snapshot_stream();
        let merge_queue = Arc::clone(&queue);
        let merge_tx = Arc::clone(&state_tx);
        // The merge task ends when the engine is released and its snapshot
        // sender is dropped.
        let merge_task = tokio::spawn(async move {
            while snapshots.changed().await.is_ok() {
                let snapshot = snapshots.borrow_and_update().clone();
                let queue = merge_queue.lock().unwrap().clone();
                merge_tx.send_modify(|state| merge(state, &snapshot, &queue));
            }
        });

        Self {
            engine,
            queue,
            state_tx,
            merge_task: Mutex::new(Some(merge_task)),
        }
    }

    /// Replace the play queue
    ///
    /// Publishes the new current track with `is_playing = false` and position
    /// 0; selecting a queue never auto-plays.
    pub fn set_queue(&self, tracks: Vec<Track>, start_index: usize) {
        let (current, index, queue_tracks) = {
            let mut queue = self.queue.lock().unwrap();
            queue.set_queue(tracks, start_index);
            (
                queue.current().cloned(),
                queue.current_index(),
                queue.tracks().to_vec(),
            )
        };
        debug!(len = queue_tracks.len(), ?index, "queue replaced");
        self.state_tx.send_modify(|state| {
            state.is_playing = false;
            state.position_ms = 0;
            state.duration_ms = current.as_ref().map_or(0, |track| track.duration_ms);
            state.current_index = index;
            state.current_track = current;
            state.queue = queue_tracks;
        });
    }

    /// Start playback of the current queue item; no-op when nothing is
    /// selected
    pub fn play(&self) {
        let current = self.queue.lock().unwrap().current().cloned();
        if let Some(track) = current {
            self.engine.play(&track.file_path);
        }
    }

    /// Pause playback
    pub fn pause(&self) {
        self.engine.pause();
    }

    /// Seek to `position_ms`; negative input is clamped to 0
    pub fn seek(&self, position_ms: i64) {
        self.engine.seek(position_ms);
    }

    /// Skip to the next track, wrapping at the end of the queue
    ///
    /// Restarts playback on the new track only if playback was already
    /// active; skipping while paused selects without playing.
    pub fn skip_next(&self) {
        self.skip(SkipDirection::Next);
    }

    /// Skip to the previous track, wrapping at the start of the queue
    pub fn skip_previous(&self) {
        self.skip(SkipDirection::Previous);
    }

    /// Latest published state, readable synchronously
    pub fn state(&self) -> PlaybackState {
        self.state_tx.borrow().clone()
    }

    /// Continuously updated state stream
    ///
    /// Safe to subscribe at any time; the latest value is immediately
    /// available.
    pub fn state_stream(&self) -> watch::Receiver<PlaybackState> {
        self.state_tx.subscribe()
    }

    /// Release the engine and reset the published state to its empty default
    ///
    /// Idempotent; transport calls after release are silent no-ops. The merge
    /// task must have finished before the reset: a snapshot it has not yet
    /// consumed would otherwise overwrite the default state afterwards.
    pub async fn release(&self) {
        let merge_task = self.merge_task.lock().unwrap().take();
        self.engine.release().await;
        if let Some(merge_task) = merge_task {
            let _ = merge_task.await;
        }
        self.state_tx.send_replace(PlaybackState::default());
    }

    fn skip(&self, direction: SkipDirection) {
        let (current, index) = {
            let mut queue = self.queue.lock().unwrap();
            let moved = match direction {
                SkipDirection::Next => queue.advance(),
                SkipDirection::Previous => queue.retreat(),
            };
            if !moved {
                return;
            }
            (queue.current().cloned(), queue.current_index())
        };

        // The trigger for restarting playback is the published playing flag
        // at the moment of the skip: skipping while paused must not start
        // playback.
        let was_playing = self.state_tx.borrow().is_playing;
        debug!(?index, was_playing, "skipped to new queue position");

        self.state_tx.send_modify(|state| {
            state.position_ms = 0;
            state.duration_ms = current.as_ref().map_or(0, |track| track.duration_ms);
            state.current_index = index;
            state.current_track = current;
        });

        if was_playing {
            self.play();
        }
    }
}

/// Merge rule for the outward state
///
/// Playing flag, position, buffered position, status, and error always come
/// from the engine snapshot; current track, queue, and index always come from
/// the queue, re-resolved by id so a track that moved position is still
/// reported at its correct index. Duration keeps the last known value while
/// the pipeline has not determined one yet.
fn merge(state: &mut PlaybackState, snapshot: &PlaybackSnapshot, queue: &TrackQueue) {
    state.is_playing = snapshot.playing;
    state.position_ms = snapshot.position_ms;
    if snapshot.duration_ms > 0 {
        state.duration_ms = snapshot.duration_ms;
    }
    state.buffered_position_ms = snapshot.buffered_position_ms;
    state.status = snapshot.status;
    state.error = snapshot.error.clone();

    let current = queue.current().cloned();
    state.current_index = current
        .as_ref()
        .and_then(|track| queue.tracks().iter().position(|t| t.id == track.id));
    state.current_track = current;
    state.queue = queue.tracks().to_vec();
}
