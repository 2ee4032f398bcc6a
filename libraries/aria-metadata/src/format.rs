//! Audio format recognition
//!
//! Recognition is by file extension only, case-insensitive. Content probing
//! happens later, when the metadata reader actually opens the file.

use std::path::Path;

/// Audio formats the library scanner accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    /// MPEG-1/2 Layer III
    Mp3,
    /// Advanced Audio Coding
    Aac,
    /// Free Lossless Audio Codec
    Flac,
    /// Waveform PCM
    Wav,
    /// Ogg Vorbis
    Ogg,
    /// MPEG-4 audio container
    M4a,
}

impl AudioFormat {
    /// Recognize a format from a file path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "mp3" => Some(Self::Mp3),
            "aac" => Some(Self::Aac),
            "flac" => Some(Self::Flac),
            "wav" => Some(Self::Wav),
            "ogg" => Some(Self::Ogg),
            "m4a" => Some(Self::M4a),
            _ => None,
        }
    }

    /// Canonical file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            Self::Mp3 => "mp3",
            Self::Aac => "aac",
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Ogg => "ogg",
            Self::M4a => "m4a",
        }
    }
}

/// Whether the path looks like a supported audio file
pub fn is_audio_file(path: &Path) -> bool {
    AudioFormat::from_path(path).is_some()
}

/// Extensions the scanner accepts, lowercase
pub fn supported_extensions() -> &'static [&'static str] {
    &["mp3", "aac", "flac", "wav", "ogg", "m4a"]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn recognizes_supported_extensions() {
        assert_eq!(
            AudioFormat::from_path(Path::new("/music/a.mp3")),
            Some(AudioFormat::Mp3)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("/music/a.flac")),
            Some(AudioFormat::Flac)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("/music/a.m4a")),
            Some(AudioFormat::M4a)
        );
    }

    #[test]
    fn recognition_is_case_insensitive() {
        assert_eq!(
            AudioFormat::from_path(Path::new("/music/A.MP3")),
            Some(AudioFormat::Mp3)
        );
        assert_eq!(
            AudioFormat::from_path(Path::new("/music/b.Ogg")),
            Some(AudioFormat::Ogg)
        );
    }

    #[test]
    fn rejects_unsupported_and_missing_extensions() {
        assert!(!is_audio_file(Path::new("/music/cover.jpg")));
        assert!(!is_audio_file(Path::new("/music/notes.txt")));
        assert!(!is_audio_file(Path::new("/music/noext")));
        assert!(!is_audio_file(&PathBuf::from("/music/dir/")));
    }

    #[test]
    fn extension_round_trips() {
        for format in [
            AudioFormat::Mp3,
            AudioFormat::Aac,
            AudioFormat::Flac,
            AudioFormat::Wav,
            AudioFormat::Ogg,
            AudioFormat::M4a,
        ] {
            let path = PathBuf::from(format!("/music/a.{}", format.extension()));
            assert_eq!(AudioFormat::from_path(&path), Some(format));
        }
    }
}
