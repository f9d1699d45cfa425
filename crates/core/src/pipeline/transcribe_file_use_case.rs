use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::audio::domain::audio_reader::AudioReader;
use crate::audio::domain::language::LanguageHint;
use crate::audio::domain::recognizer_loader::RecognizerLoader;
use crate::audio::domain::transcribe_options::TranscribeOptions;
use crate::shared::constants::{
    DEFAULT_LANGUAGE, DEFAULT_MODEL, TRANSCRIPT_EXTENSION, WHISPER_SAMPLE_RATE,
};

#[derive(Error, Debug)]
pub enum TranscribeError {
    #[error("audio file not found: {0}")]
    SourceNotFound(PathBuf),
    #[error("transcription produced no usable text")]
    EmptyTranscript,
}

/// One transcription job: what to read, where to write, which model and
/// language to use.
#[derive(Clone, Debug)]
pub struct TranscribeRequest {
    pub source: PathBuf,
    /// Where the transcript goes. Derived from `source` when `None`.
    pub destination: Option<PathBuf>,
    /// Whisper variant selector, e.g. `"base"`.
    pub model: String,
    pub language: LanguageHint,
    pub options: TranscribeOptions,
}

impl TranscribeRequest {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: None,
            model: DEFAULT_MODEL.to_string(),
            language: LanguageHint::Tag(DEFAULT_LANGUAGE.to_string()),
            options: TranscribeOptions::default(),
        }
    }
}

/// Destination used when the caller does not supply one: the source path
/// with its extension replaced by the transcript extension.
pub fn default_destination(source: &Path) -> PathBuf {
    source.with_extension(TRANSCRIPT_EXTENSION)
}

/// Transcribes one audio file to a plain-text file.
///
/// Linear and non-resumable: validate the source, fix the destination, load
/// the model, decode, run inference, persist. Failures from the reader,
/// loader, or recognizer propagate unchanged.
pub struct TranscribeFileUseCase {
    reader: Box<dyn AudioReader>,
    loader: Box<dyn RecognizerLoader>,
}

impl TranscribeFileUseCase {
    pub fn new(reader: Box<dyn AudioReader>, loader: Box<dyn RecognizerLoader>) -> Self {
        Self { reader, loader }
    }

    /// Run the job and return the absolute path of the written transcript.
    ///
    /// A missing source fails before any model work. A blank transcript
    /// (whitespace only) fails without writing the destination file; an
    /// existing destination file is otherwise overwritten.
    pub fn execute(&self, request: &TranscribeRequest) -> Result<PathBuf, Box<dyn std::error::Error>> {
        if !request.source.is_file() {
            return Err(TranscribeError::SourceNotFound(request.source.clone()).into());
        }

        let destination = request
            .destination
            .clone()
            .unwrap_or_else(|| default_destination(&request.source));
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let recognizer = self.loader.load(&request.model)?;

        let audio = self
            .reader
            .read_audio(&request.source, WHISPER_SAMPLE_RATE)?;
        log::info!(
            "Decoded {:.1}s of audio from {}",
            audio.duration(),
            request.source.display()
        );

        let transcript = recognizer.transcribe(&audio, &request.language, &request.options)?;
        if transcript.is_blank() {
            return Err(TranscribeError::EmptyTranscript.into());
        }

        fs::write(&destination, transcript.trimmed())?;
        log::info!("Transcript written to {}", destination.display());

        Ok(fs::canonicalize(&destination)?)
    }
}
