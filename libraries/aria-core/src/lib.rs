//! Aria Player Core
//!
//! Platform-agnostic domain types and error handling for Aria Player.
//!
//! This crate provides the foundational building blocks shared by the
//! playback and metadata crates:
//! - **Domain Types**: [`Track`], [`ScanProgress`]
//! - **Error Handling**: Unified [`CoreError`] and [`Result`] types
//!
//! # Example
//!
//! ```rust
//! use aria_core::Track;
//! use std::path::PathBuf;
//!
//! let track = Track::new("My Favorite Song", PathBuf::from("/music/song.mp3"));
//! assert_eq!(track.id, "/music/song.mp3");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{ScanProgress, Track};
