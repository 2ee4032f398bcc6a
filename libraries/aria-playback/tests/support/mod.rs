//! Shared test doubles: a scriptable media pipeline and focus backend
//!
//! Each mock splits into the object handed to the engine and a handle the
//! test keeps, sharing state through an `Arc<Mutex<_>>` so the test can
//! inspect calls and push platform events.

#![allow(dead_code)]

use aria_playback::types::PipelineStatus;
use aria_playback::{
    AudioFocus, FocusChange, FocusRequest, MediaPipeline, PipelineEvent, PlaybackConfig,
};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;

/// Config with a progress tick far in the future, for tests that must prove
/// a snapshot update was event-driven rather than tick-driven
pub fn idle_tick_config() -> PlaybackConfig {
    PlaybackConfig {
        progress_interval: Duration::from_secs(3600),
        ..PlaybackConfig::default()
    }
}

/// Config with a rapid progress tick
pub fn fast_tick_config() -> PlaybackConfig {
    PlaybackConfig {
        progress_interval: Duration::from_millis(20),
        ..PlaybackConfig::default()
    }
}

/// Poll `condition` until it holds, failing the test after five seconds
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not met within timeout");
}

// ===== Media pipeline mock =====

#[derive(Debug)]
struct PipelineInner {
    loaded: Option<PathBuf>,
    playing: bool,
    position_ms: u64,
    duration_ms: u64,
    buffered_position_ms: u64,
    status: PipelineStatus,
    volume: f32,
    play_calls: usize,
    pause_calls: usize,
    stop_calls: usize,
    seeks: Vec<u64>,
    release_calls: usize,
}

impl Default for PipelineInner {
    fn default() -> Self {
        Self {
            loaded: None,
            playing: false,
            position_ms: 0,
            duration_ms: 0,
            buffered_position_ms: 0,
            status: PipelineStatus::Idle,
            volume: 1.0,
            play_calls: 0,
            pause_calls: 0,
            stop_calls: 0,
            seeks: Vec::new(),
            release_calls: 0,
        }
    }
}

/// Pipeline double handed to the engine
pub struct MockPipeline {
    inner: Arc<Mutex<PipelineInner>>,
    events_rx: Option<mpsc::UnboundedReceiver<PipelineEvent>>,
}

/// Test-side handle for the pipeline double
pub struct PipelineHandle {
    inner: Arc<Mutex<PipelineInner>>,
    events_tx: mpsc::UnboundedSender<PipelineEvent>,
}

impl MockPipeline {
    pub fn new() -> (Self, PipelineHandle) {
        let inner = Arc::new(Mutex::new(PipelineInner::default()));
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (
            Self {
                inner: Arc::clone(&inner),
                events_rx: Some(events_rx),
            },
            PipelineHandle { inner, events_tx },
        )
    }
}

impl MediaPipeline for MockPipeline {
    fn load(&mut self, locator: &Path) {
        let mut inner = self.inner.lock().unwrap();
        inner.loaded = Some(locator.to_path_buf());
        inner.position_ms = 0;
        inner.status = PipelineStatus::Ready;
    }

    fn play(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.playing = true;
        inner.play_calls += 1;
    }

    fn pause(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.playing = false;
        inner.pause_calls += 1;
    }

    fn stop(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.playing = false;
        inner.status = PipelineStatus::Idle;
        inner.stop_calls += 1;
    }

    fn seek(&mut self, position_ms: u64) {
        let mut inner = self.inner.lock().unwrap();
        inner.position_ms = position_ms;
        inner.seeks.push(position_ms);
    }

    fn position_ms(&self) -> u64 {
        self.inner.lock().unwrap().position_ms
    }

    fn duration_ms(&self) -> u64 {
        self.inner.lock().unwrap().duration_ms
    }

    fn buffered_position_ms(&self) -> u64 {
        self.inner.lock().unwrap().buffered_position_ms
    }

    fn is_playing(&self) -> bool {
        self.inner.lock().unwrap().playing
    }

    fn status(&self) -> PipelineStatus {
        self.inner.lock().unwrap().status
    }

    fn volume(&self) -> f32 {
        self.inner.lock().unwrap().volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.inner.lock().unwrap().volume = volume;
    }

    fn events(&mut self) -> mpsc::UnboundedReceiver<PipelineEvent> {
        self.events_rx.take().unwrap_or_else(|| {
            let (_tx, rx) = mpsc::unbounded_channel();
            rx
        })
    }

    fn release(&mut self) {
        let mut inner = self.inner.lock().unwrap();
        inner.playing = false;
        inner.release_calls += 1;
    }
}

impl PipelineHandle {
    /// Push a pipeline event to the engine
    pub fn emit(&self, event: PipelineEvent) {
        let _ = self.events_tx.send(event);
    }

    /// Simulate decode progress
    pub fn set_position(&self, position_ms: u64) {
        self.inner.lock().unwrap().position_ms = position_ms;
    }

    /// Simulate a known media duration
    pub fn set_duration(&self, duration_ms: u64) {
        self.inner.lock().unwrap().duration_ms = duration_ms;
    }

    /// Simulate buffering progress
    pub fn set_buffered_position(&self, buffered_ms: u64) {
        self.inner.lock().unwrap().buffered_position_ms = buffered_ms;
    }

    pub fn loaded(&self) -> Option<PathBuf> {
        self.inner.lock().unwrap().loaded.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.inner.lock().unwrap().playing
    }

    pub fn volume(&self) -> f32 {
        self.inner.lock().unwrap().volume
    }

    pub fn play_calls(&self) -> usize {
        self.inner.lock().unwrap().play_calls
    }

    pub fn pause_calls(&self) -> usize {
        self.inner.lock().unwrap().pause_calls
    }

    pub fn stop_calls(&self) -> usize {
        self.inner.lock().unwrap().stop_calls
    }

    pub fn last_seek(&self) -> Option<u64> {
        self.inner.lock().unwrap().seeks.last().copied()
    }

    pub fn release_calls(&self) -> usize {
        self.inner.lock().unwrap().release_calls
    }
}

// ===== Audio focus mock =====

#[derive(Debug, Default)]
struct FocusInner {
    grant: bool,
    requests: usize,
    abandons: usize,
}

/// Focus double handed to the engine
pub struct MockFocus {
    inner: Arc<Mutex<FocusInner>>,
    changes_rx: Option<mpsc::UnboundedReceiver<FocusChange>>,
}

/// Test-side handle for the focus double
pub struct FocusHandle {
    inner: Arc<Mutex<FocusInner>>,
    changes_tx: mpsc::UnboundedSender<FocusChange>,
}

impl MockFocus {
    pub fn granting() -> (Self, FocusHandle) {
        Self::with_grant(true)
    }

    pub fn denying() -> (Self, FocusHandle) {
        Self::with_grant(false)
    }

    fn with_grant(grant: bool) -> (Self, FocusHandle) {
        let inner = Arc::new(Mutex::new(FocusInner {
            grant,
            ..FocusInner::default()
        }));
        let (changes_tx, changes_rx) = mpsc::unbounded_channel();
        (
            Self {
                inner: Arc::clone(&inner),
                changes_rx: Some(changes_rx),
            },
            FocusHandle { inner, changes_tx },
        )
    }
}

impl AudioFocus for MockFocus {
    fn request(&mut self) -> FocusRequest {
        let mut inner = self.inner.lock().unwrap();
        inner.requests += 1;
        if inner.grant {
            FocusRequest::Granted
        } else {
            FocusRequest::Denied
        }
    }

    fn abandon(&mut self) {
        self.inner.lock().unwrap().abandons += 1;
    }

    fn changes(&mut self) -> mpsc::UnboundedReceiver<FocusChange> {
        self.changes_rx.take().unwrap_or_else(|| {
            let (_tx, rx) = mpsc::unbounded_channel();
            rx
        })
    }
}

impl FocusHandle {
    /// Push a platform focus-change notification to the engine
    pub fn emit(&self, change: FocusChange) {
        let _ = self.changes_tx.send(change);
    }

    /// Flip whether future requests are granted
    pub fn set_grant(&self, grant: bool) {
        self.inner.lock().unwrap().grant = grant;
    }

    pub fn requests(&self) -> usize {
        self.inner.lock().unwrap().requests
    }

    pub fn abandons(&self) -> usize {
        self.inner.lock().unwrap().abandons
    }
}
