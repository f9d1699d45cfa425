use crate::audio::domain::speech_recognizer::SpeechRecognizer;

/// Domain interface for acquiring a recognizer keyed by a model selector.
///
/// Loading may download weights or allocate large buffers; callers validate
/// their inputs before invoking it.
pub trait RecognizerLoader: Send {
    fn load(
        &self,
        selector: &str,
    ) -> Result<Box<dyn SpeechRecognizer>, Box<dyn std::error::Error>>;
}
