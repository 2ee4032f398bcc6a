//! Media pipeline collaborator
//!
//! The platform decode/output primitive the engine drives. Implementations
//! wrap whatever the platform provides (a system media player, a
//! decoder-plus-output stack); the engine only ever talks to this trait.
//!
//! Transport methods issue commands and return promptly; failures surface
//! asynchronously through the event channel, never as return values.

use crate::types::PipelineStatus;
use std::path::Path;
use tokio::sync::mpsc;

/// Events pushed by the media pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    /// The is-playing flag changed
    IsPlayingChanged(bool),

    /// The pipeline status changed
    StatusChanged(PipelineStatus),

    /// The pipeline failed (corrupt file, unsupported format, I/O failure)
    Error(String),

    /// The pipeline moved to a different media item
    TrackTransition,
}

/// Platform media pipeline
///
/// Drives one media item at a time. The event channel is taken once, by the
/// engine actor.
pub trait MediaPipeline: Send {
    /// Load the media at the given locator, replacing any current item
    fn load(&mut self, locator: &Path);

    /// Start or resume output
    fn play(&mut self);

    /// Pause output, keeping the loaded item
    fn pause(&mut self);

    /// Halt output
    fn stop(&mut self);

    /// Seek to the given position in milliseconds
    fn seek(&mut self, position_ms: u64);

    /// Current playback position in milliseconds
    fn position_ms(&self) -> u64;

    /// Duration of the loaded media in milliseconds (0 when unknown)
    fn duration_ms(&self) -> u64;

    /// Buffered position in milliseconds
    fn buffered_position_ms(&self) -> u64;

    /// Whether the pipeline is producing sound
    fn is_playing(&self) -> bool;

    /// Current pipeline status
    fn status(&self) -> PipelineStatus;

    /// Current output volume (0.0 - 1.0)
    fn volume(&self) -> f32;

    /// Set the output volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Take the pipeline event channel
    fn events(&mut self) -> mpsc::UnboundedReceiver<PipelineEvent>;

    /// Release the underlying resources; no calls are valid afterwards
    fn release(&mut self);
}
