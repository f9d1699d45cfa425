pub mod ffmpeg_audio_reader;
pub mod whisper_loader;
pub mod whisper_recognizer;
