//! Track source classification

use serde::{Deserialize, Serialize};

/// Extensions the primary sink can play directly
const AUDIO_EXTENSIONS: [&str; 4] = [".mp3", ".wav", ".ogg", ".m4a"];

/// How a track gets played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    /// Audio file loaded into the primary sink
    LocalAudio,

    /// Link handed to an external viewer
    External,
}

/// Classify a track source
///
/// A source is local audio when a known extension (any case) is directly
/// followed by `?` or the end of the string, e.g. `a.MP3?x=1`.
pub fn classify(src: &str) -> TrackKind {
    let lower = src.to_ascii_lowercase();

    // Some segment ends with a known extension, right before a '?' or the end
    let local = lower
        .split('?')
        .any(|segment| AUDIO_EXTENSIONS.iter().any(|ext| segment.ends_with(ext)));

    if local {
        TrackKind::LocalAudio
    } else {
        TrackKind::External
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_audio_sources() {
        assert_eq!(classify("media/soft-morning.mp3"), TrackKind::LocalAudio);
        assert_eq!(classify("a.MP3?x=1"), TrackKind::LocalAudio);
        assert_eq!(classify("clip.Wav"), TrackKind::LocalAudio);
        assert_eq!(classify("/x/y.ogg?"), TrackKind::LocalAudio);
        assert_eq!(classify("voice.m4a"), TrackKind::LocalAudio);
    }

    #[test]
    fn external_sources() {
        assert_eq!(classify("https://example.com/track"), TrackKind::External);
        assert_eq!(
            classify("https://open.spotify.com/track/6yUKgDm2hKR04i683jyI9E?si=385afd4d70bf4ba7"),
            TrackKind::External
        );
        assert_eq!(classify("song.mp3.html"), TrackKind::External);
        assert_eq!(classify("song.mp3#t=10"), TrackKind::External);
        assert_eq!(classify("song.flac"), TrackKind::External);
        assert_eq!(classify(""), TrackKind::External);
    }

    #[test]
    fn extension_before_later_query_mark_counts() {
        assert_eq!(classify("a.ogg?b=c?d"), TrackKind::LocalAudio);
        assert_eq!(classify("page?file=x.mp3"), TrackKind::LocalAudio);
    }
}
