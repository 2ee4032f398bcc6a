//! Audio focus arbitration
//!
//! Wraps the platform's exclusive audio-output resource behind the
//! [`AudioFocus`] trait and turns asynchronous focus-change notifications
//! into a small state machine. The arbiter is a thin protocol translator:
//! interpretation of a change (duck vs pause vs stop vs auto-resume) belongs
//! to the playback engine, the sole subscriber, because only the engine
//! knows the playing/volume state needed to react correctly.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::debug;

/// Raw focus-change notification kinds delivered by the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusChange {
    /// Focus regained after a transient loss
    Gained,

    /// Focus lost permanently; stop output and release the resource
    Lost,

    /// Focus lost briefly; pause output but keep the reservation
    LostTransient,

    /// Focus lost briefly to a lower-priority sound; ducking is permitted
    LostTransientCanDuck,
}

/// Outcome of a focus request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRequest {
    /// The exclusive audio resource was granted
    Granted,

    /// The request was denied; playback must not start
    Denied,
}

/// Platform audio-focus primitive
///
/// External collaborator: the platform's request/abandon API plus a push
/// channel of focus-change notifications. The change channel is taken once,
/// by the engine actor that owns the arbiter.
pub trait AudioFocus: Send {
    /// Request the exclusive audio resource
    fn request(&mut self) -> FocusRequest;

    /// Release the exclusive audio resource; always allowed, idempotent
    fn abandon(&mut self);

    /// Take the focus-change notification channel
    fn changes(&mut self) -> mpsc::UnboundedReceiver<FocusChange>;
}

/// Focus arbitration state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusState {
    /// No focus held (initial state, and after every abandon)
    #[default]
    None,

    /// Focus held; output permitted
    Granted,

    /// Focus transiently lost with ducking permitted; output continues at
    /// reduced volume
    DuckedTransient,

    /// Focus transiently lost; output paused, reservation kept
    PausedTransient,

    /// Focus permanently lost; no auto-resume
    Lost,
}

/// Audio focus arbiter
///
/// Owns the platform [`AudioFocus`] backend and the [`FocusState`] machine.
/// Transitions are driven by [`observe`](FocusArbiter::observe) calls (one per
/// platform notification) and by explicit request/abandon.
pub struct FocusArbiter {
    backend: Box<dyn AudioFocus>,
    state: FocusState,
}

impl FocusArbiter {
    /// Create an arbiter over the given platform backend
    pub fn new(backend: Box<dyn AudioFocus>) -> Self {
        Self {
            backend,
            state: FocusState::None,
        }
    }

    /// Request audio focus
    ///
    /// Returns `true` iff the resource was granted. On denial the state is
    /// left untouched; the caller must treat this as "cannot start playback".
    pub fn request(&mut self) -> bool {
        match self.backend.request() {
            FocusRequest::Granted => {
                self.state = FocusState::Granted;
                true
            }
            FocusRequest::Denied => {
                debug!("audio focus request denied");
                false
            }
        }
    }

    /// Abandon audio focus
    ///
    /// Always allowed, idempotent; resets the state to [`FocusState::None`].
    pub fn abandon(&mut self) {
        self.backend.abandon();
        self.state = FocusState::None;
    }

    /// Apply a platform focus-change notification to the state machine
    ///
    /// Notifications arriving while no focus is held (or after a permanent
    /// loss) leave the state untouched. Returns the state after the
    /// transition.
    pub fn observe(&mut self, change: FocusChange) -> FocusState {
        use FocusState::{DuckedTransient, Granted, Lost, PausedTransient};

        let next = match (self.state, change) {
            (Granted | DuckedTransient | PausedTransient, FocusChange::Lost) => Lost,
            (Granted | DuckedTransient, FocusChange::LostTransient) => PausedTransient,
            (Granted, FocusChange::LostTransientCanDuck) => DuckedTransient,
            (DuckedTransient | PausedTransient, FocusChange::Gained) => Granted,
            (state, _) => state,
        };
        if next != self.state {
            debug!(from = ?self.state, to = ?next, ?change, "focus transition");
            self.state = next;
        }
        self.state
    }

    /// Current focus state
    pub fn state(&self) -> FocusState {
        self.state
    }
}
