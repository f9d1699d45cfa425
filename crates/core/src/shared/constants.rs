/// Sample rate Whisper models expect.
pub const WHISPER_SAMPLE_RATE: u32 = 16000;

pub const DEFAULT_MODEL: &str = "base";
pub const DEFAULT_LANGUAGE: &str = "es";

/// Extension given to derived transcript paths.
pub const TRANSCRIPT_EXTENSION: &str = "txt";
