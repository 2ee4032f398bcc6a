//! Aria Player - Playback Core
//!
//! Queue, audio focus arbitration, playback engine, and the coordinating
//! manager for Aria Player.
//!
//! This crate provides:
//! - A circular play [`TrackQueue`] (pure data, no I/O)
//! - A [`FocusArbiter`] over the platform's exclusive audio-output resource
//! - A [`PlaybackEngine`] driving the platform [`MediaPipeline`] through a
//!   single actor task, publishing a consistent [`PlaybackSnapshot`] stream
//! - A [`PlaybackManager`] merging engine snapshots with queue identity into
//!   the one [`PlaybackState`] stream the presentation layer observes
//!
//! # Architecture
//!
//! Platform specifics (the actual decoder/output stack and the audio focus
//! API) are provided via the [`MediaPipeline`] and [`AudioFocus`] traits.
//! Everything that changes state (transport commands, pipeline events,
//! focus changes, the periodic progress tick) feeds one ordered event loop
//! per engine, so observers always see an internally consistent snapshot and
//! the exclusive focus slot is held exactly while the engine is trying to
//! produce sound.
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_playback::{PlaybackConfig, PlaybackEngine, PlaybackManager};
//! # use aria_playback::{AudioFocus, MediaPipeline};
//! # fn platform_pipeline() -> Box<dyn MediaPipeline> { unimplemented!() }
//! # fn platform_focus() -> Box<dyn AudioFocus> { unimplemented!() }
//! # async fn demo(tracks: Vec<aria_core::Track>) {
//! let engine = PlaybackEngine::new(
//!     platform_pipeline(),
//!     platform_focus(),
//!     PlaybackConfig::default(),
//! );
//! let manager = PlaybackManager::new(engine);
//!
//! manager.set_queue(tracks, 0); // selecting never auto-plays
//! manager.play();
//! manager.skip_next();
//!
//! let state = manager.state();
//! println!("now playing: {:?}", state.current_track.map(|t| t.title));
//!
//! manager.release().await;
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod engine;
mod error;
mod focus;
mod manager;
mod pipeline;
mod queue;
pub mod types;

// Public exports
pub use engine::PlaybackEngine;
pub use error::{PlaybackError, Result};
pub use focus::{AudioFocus, FocusArbiter, FocusChange, FocusRequest, FocusState};
pub use manager::PlaybackManager;
pub use pipeline::{MediaPipeline, PipelineEvent};
pub use queue::TrackQueue;
pub use types::{PipelineStatus, PlaybackConfig, PlaybackSnapshot, PlaybackState};
