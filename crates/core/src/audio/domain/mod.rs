pub mod audio_reader;
pub mod audio_segment;
pub mod language;
pub mod recognizer_loader;
pub mod speech_recognizer;
pub mod transcribe_options;
pub mod transcript;
