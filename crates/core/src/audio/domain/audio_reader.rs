use std::path::Path;

use crate::audio::domain::audio_segment::AudioSegment;

/// Domain interface for decoding an audio file to PCM.
pub trait AudioReader: Send {
    /// Decode the file's audio to a mono segment at the given sample rate.
    /// Fails if the file cannot be opened or carries no audio stream.
    fn read_audio(
        &self,
        path: &Path,
        target_sample_rate: u32,
    ) -> Result<AudioSegment, Box<dyn std::error::Error>>;
}
