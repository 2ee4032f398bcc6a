//! Playback engine
//!
//! Drives a single media item through the [`MediaPipeline`] and owns the
//! [`FocusArbiter`] lifecycle. All mutation happens on one actor task:
//! transport commands, pipeline events, focus changes, and the periodic
//! progress tick feed a single ordered event loop, so snapshot writes are
//! serialized without locks. Snapshots go out through a `watch` channel:
//! the latest value is always synchronously readable and observers see every
//! state change in order.
//!
//! The engine holds audio focus iff it is actively attempting to produce
//! sound: focus is requested on play and abandoned on pause, stop, permanent
//! focus loss, pipeline error, and release.

use crate::error::PlaybackError;
use crate::focus::{AudioFocus, FocusArbiter, FocusChange};
use crate::pipeline::{MediaPipeline, PipelineEvent};
use crate::types::{PlaybackConfig, PlaybackSnapshot};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, warn};

/// Transport commands applied by the engine actor, in call order
enum EngineCommand {
    Play(PathBuf),
    Pause,
    Resume,
    Stop,
    Seek(i64),
    Release(oneshot::Sender<()>),
}

/// Playback engine handle
///
/// Transport calls enqueue commands and return promptly. After
/// [`release`](PlaybackEngine::release) every call is a silent no-op.
pub struct PlaybackEngine {
    commands: mpsc::UnboundedSender<EngineCommand>,
    snapshot_rx: watch::Receiver<PlaybackSnapshot>,
}

impl PlaybackEngine {
    /// Create an engine over the given pipeline and focus backend and spawn
    /// its actor task
    pub fn new(
        mut pipeline: Box<dyn MediaPipeline>,
        mut focus: Box<dyn AudioFocus>,
        config: PlaybackConfig,
    ) -> Self {
        let (commands, command_rx) = mpsc::unbounded_channel();
        let (snapshot_tx, snapshot_rx) = watch::channel(PlaybackSnapshot::default());

        let pipeline_events = pipeline.events();
        let focus_changes = focus.changes();

        let actor = EngineActor {
            pipeline,
            arbiter: FocusArbiter::new(focus),
            snapshot_tx,
            duck_volume: config.duck_volume,
            last_error: None,
            resume_on_gain: false,
            last_volume: 1.0,
        };
        tokio::spawn(actor.run(
            command_rx,
            pipeline_events,
            focus_changes,
            config.progress_interval,
        ));

        Self {
            commands,
            snapshot_rx,
        }
    }

    /// Start playback of the media at `locator`
    ///
    /// Focus is requested first; on denial a [`PlaybackError::FocusDenied`]
    /// is recorded in the snapshot and the pipeline is not started.
    pub fn play(&self, locator: &Path) {
        self.send(EngineCommand::Play(locator.to_path_buf()));
    }

    /// Pause playback and abandon audio focus
    ///
    /// A paused player must not keep holding the exclusive audio resource.
    pub fn pause(&self) {
        self.send(EngineCommand::Pause);
    }

    /// Resume playback without re-requesting focus
    ///
    /// Valid while focus is still granted; after a focus loss, playback must
    /// go through [`play`](PlaybackEngine::play) again.
    pub fn resume(&self) {
        self.send(EngineCommand::Resume);
    }

    /// Halt playback and abandon audio focus
    pub fn stop(&self) {
        self.send(EngineCommand::Stop);
    }

    /// Seek to `position_ms`, clamping negative input to 0
    ///
    /// The snapshot is recomputed immediately, without waiting for the next
    /// progress tick.
    pub fn seek(&self, position_ms: i64) {
        self.send(EngineCommand::Seek(position_ms));
    }

    /// Latest snapshot, readable synchronously
    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.snapshot_rx.borrow().clone()
    }

    /// Continuously updated snapshot stream
    ///
    /// Never completes while the engine is alive; stops emitting after
    /// [`release`](PlaybackEngine::release).
    pub fn snapshot_stream(&self) -> watch::Receiver<PlaybackSnapshot> {
        self.snapshot_rx.clone()
    }

    /// Tear the engine down: stop the progress tick, abandon focus, release
    /// the pipeline, in that order
    ///
    /// Idempotent and safe to call even if playback never started. Resolves
    /// once the pipeline has been released.
    pub async fn release(&self) {
        let (ack_tx, ack_rx) = oneshot::channel();
        if self.commands.send(EngineCommand::Release(ack_tx)).is_err() {
            // Actor already gone; nothing to tear down.
            return;
        }
        let _ = ack_rx.await;
    }

    fn send(&self, command: EngineCommand) {
        // Errors mean the actor has been released; transport calls after
        // release are tolerated silently.
        let _ = self.commands.send(command);
    }
}

/// Engine actor state; lives on the spawned task
struct EngineActor {
    pipeline: Box<dyn MediaPipeline>,
    arbiter: FocusArbiter,
    snapshot_tx: watch::Sender<PlaybackSnapshot>,
    duck_volume: f32,
    /// Last observed error, merged into every snapshot until a newer error
    /// or an explicit clear
    last_error: Option<PlaybackError>,
    /// Whether playback was interrupted by a transient focus loss and should
    /// auto-resume exactly once on regain
    resume_on_gain: bool,
    /// Volume before ducking, restored on focus regain
    last_volume: f32,
}

impl EngineActor {
    async fn run(
        mut self,
        mut commands: mpsc::UnboundedReceiver<EngineCommand>,
        mut pipeline_events: mpsc::UnboundedReceiver<PipelineEvent>,
        mut focus_changes: mpsc::UnboundedReceiver<FocusChange>,
        progress_interval: std::time::Duration,
    ) {
        let mut ticker = interval(progress_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => self.refresh(),
                command = commands.recv() => match command {
                    Some(EngineCommand::Release(ack)) => {
                        self.shutdown();
                        let _ = ack.send(());
                        return;
                    }
                    Some(command) => self.handle_command(command),
                    // Engine handle dropped without release: tear down
                    // anyway so the focus slot is not leaked.
                    None => {
                        self.shutdown();
                        return;
                    }
                },
                Some(event) = pipeline_events.recv() => self.handle_pipeline_event(event),
                Some(change) = focus_changes.recv() => self.handle_focus_change(change),
            }
        }
    }

    /// Teardown ordering is mandatory: by the time this runs the tick is no
    /// longer polled, then focus is abandoned, then the pipeline is released.
    fn shutdown(&mut self) {
        debug!("releasing playback engine");
        self.arbiter.abandon();
        self.pipeline.release();
    }

    fn handle_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::Play(locator) => {
                if !self.arbiter.request() {
                    warn!(locator = %locator.display(), "audio focus denied, playback not started");
                    self.last_error = Some(PlaybackError::FocusDenied);
                    self.refresh();
                    return;
                }
                debug!(locator = %locator.display(), "starting playback");
                self.last_error = None;
                self.pipeline.load(&locator);
                self.pipeline.play();
                self.refresh();
            }
            EngineCommand::Pause => {
                self.pipeline.pause();
                self.arbiter.abandon();
                self.refresh();
            }
            EngineCommand::Resume => {
                self.pipeline.play();
                self.refresh();
            }
            EngineCommand::Stop => {
                self.pipeline.stop();
                self.arbiter.abandon();
                self.refresh();
            }
            EngineCommand::Seek(position_ms) => {
                self.pipeline.seek(position_ms.max(0) as u64);
                self.refresh();
            }
            EngineCommand::Release(_) => unreachable!("handled in the actor loop"),
        }
    }

    fn handle_pipeline_event(&mut self, event: PipelineEvent) {
        match event {
            PipelineEvent::IsPlayingChanged(playing) => {
                if playing {
                    // Playback is audibly running; stale errors must not
                    // linger in the snapshot.
                    self.last_error = None;
                }
                self.refresh();
            }
            PipelineEvent::StatusChanged(_) | PipelineEvent::TrackTransition => self.refresh(),
            PipelineEvent::Error(message) => {
                warn!(%message, "pipeline error");
                self.last_error = Some(PlaybackError::Pipeline(message));
                self.pipeline.stop();
                self.arbiter.abandon();
                self.refresh();
            }
        }
    }

    fn handle_focus_change(&mut self, change: FocusChange) {
        self.arbiter.observe(change);
        match change {
            FocusChange::Gained => {
                self.pipeline.set_volume(self.last_volume);
                if self.resume_on_gain {
                    self.resume_on_gain = false;
                    self.pipeline.play();
                }
                self.refresh();
            }
            FocusChange::Lost => {
                self.resume_on_gain = false;
                self.pipeline.stop();
                self.arbiter.abandon();
                self.refresh();
            }
            FocusChange::LostTransient => {
                self.resume_on_gain = self.pipeline.is_playing();
                self.pipeline.pause();
                self.refresh();
            }
            FocusChange::LostTransientCanDuck => {
                self.resume_on_gain = self.pipeline.is_playing();
                self.last_volume = self.pipeline.volume();
                self.pipeline.set_volume(self.duck_volume);
                self.refresh();
            }
        }
    }

    /// Recompute the snapshot from the pipeline's live accessors
    ///
    /// Always a full recompute, never a patch. The retained error rides along
    /// until something newer replaces or clears it.
    fn refresh(&mut self) {
        let snapshot = PlaybackSnapshot {
            playing: self.pipeline.is_playing(),
            position_ms: self.pipeline.position_ms(),
            duration_ms: self.pipeline.duration_ms(),
            buffered_position_ms: self.pipeline.buffered_position_ms(),
            status: self.pipeline.status(),
            error: self.last_error.clone(),
        };
        self.snapshot_tx.send_replace(snapshot);
    }
}
