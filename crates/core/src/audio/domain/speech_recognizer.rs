use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::language::LanguageHint;
use crate::audio::domain::transcribe_options::TranscribeOptions;
use crate::audio::domain::transcript::Transcript;

/// Domain interface for speech-to-text transcription.
pub trait SpeechRecognizer: Send {
    fn transcribe(
        &self,
        audio: &AudioSegment,
        language: &LanguageHint,
        options: &TranscribeOptions,
    ) -> Result<Transcript, Box<dyn std::error::Error>>;
}

impl std::fmt::Debug for dyn SpeechRecognizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SpeechRecognizer")
    }
}
