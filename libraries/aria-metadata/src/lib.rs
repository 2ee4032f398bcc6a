//! Aria Player - Metadata
//!
//! Metadata extraction and library scanning for Aria Player.
//!
//! This crate provides:
//! - Audio format recognition by extension (MP3, AAC, FLAC, WAV, OGG, M4A)
//! - Tag reading from audio files into [`aria_core::Track`]
//! - Recursive library scanning with progress reporting
//!
//! # Example
//!
//! ```rust,no_run
//! use aria_metadata::{AudioScanner, LoftyTrackReader};
//! use std::path::Path;
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Read a single file
//! let reader = LoftyTrackReader::new();
//! let track = reader.read(Path::new("/music/song.mp3"))?;
//!
//! // Scan a library
//! let scanner = AudioScanner::new();
//! let tracks = scanner.scan(Path::new("/music"), None).await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod format;
mod reader;
mod scanner;

pub use error::{MetadataError, Result};
pub use format::{is_audio_file, supported_extensions, AudioFormat};
pub use reader::LoftyTrackReader;
pub use scanner::AudioScanner;
