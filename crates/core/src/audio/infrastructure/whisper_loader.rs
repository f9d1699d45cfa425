use std::path::Path;

use crate::audio::domain::recognizer_loader::RecognizerLoader;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::infrastructure::whisper_recognizer::WhisperRecognizer;
use crate::shared::model_resolver::{self, ProgressFn};

const GGML_REPO_URL: &str = "https://huggingface.co/ggerganov/whisper.cpp/resolve/main";

/// Known Whisper variants: selector -> ggml checkpoint filename.
const MODEL_VARIANTS: &[(&str, &str)] = &[
    ("tiny", "ggml-tiny.bin"),
    ("tiny.en", "ggml-tiny.en.bin"),
    ("base", "ggml-base.bin"),
    ("base.en", "ggml-base.en.bin"),
    ("small", "ggml-small.bin"),
    ("small.en", "ggml-small.en.bin"),
    ("medium", "ggml-medium.bin"),
    ("medium.en", "ggml-medium.en.bin"),
    ("large", "ggml-large-v3.bin"),
    ("large-v2", "ggml-large-v2.bin"),
    ("large-v3", "ggml-large-v3.bin"),
];

/// Loads Whisper recognizers by variant name, resolving the checkpoint
/// through the model cache (downloading it on first use).
///
/// The selector may also be a filesystem path to a ggml checkpoint, which
/// bypasses the catalog entirely.
#[derive(Default)]
pub struct WhisperLoader {
    progress: Option<Box<dyn Fn(u64, u64) + Send>>,
}

impl WhisperLoader {
    pub fn new() -> Self {
        Self { progress: None }
    }

    /// Report download progress through `f` when a checkpoint has to be fetched.
    pub fn with_progress(mut self, f: impl Fn(u64, u64) + Send + 'static) -> Self {
        self.progress = Some(Box::new(f));
        self
    }
}

fn variant_filename(selector: &str) -> Option<&'static str> {
    MODEL_VARIANTS
        .iter()
        .find(|(name, _)| *name == selector)
        .map(|(_, filename)| *filename)
}

fn known_selectors() -> String {
    let names: Vec<&str> = MODEL_VARIANTS.iter().map(|(name, _)| *name).collect();
    names.join(", ")
}

impl RecognizerLoader for WhisperLoader {
    fn load(
        &self,
        selector: &str,
    ) -> Result<Box<dyn SpeechRecognizer>, Box<dyn std::error::Error>> {
        if Path::new(selector).is_file() {
            return Ok(Box::new(WhisperRecognizer::new(Path::new(selector))?));
        }

        let filename = variant_filename(selector).ok_or_else(|| {
            format!(
                "unknown Whisper model '{selector}' (expected one of: {}, or a path to a ggml file)",
                known_selectors()
            )
        })?;
        let url = format!("{GGML_REPO_URL}/{filename}");

        log::info!("Resolving model: {filename}");
        let progress: Option<&ProgressFn> = self.progress.as_deref();
        let model_path = model_resolver::resolve(filename, &url, progress)?;

        Ok(Box::new(WhisperRecognizer::new(&model_path)?))
    }
}
