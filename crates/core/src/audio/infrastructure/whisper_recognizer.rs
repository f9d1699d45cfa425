use std::path::{Path, PathBuf};

use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio::domain::audio_segment::AudioSegment;
use crate::audio::domain::language::LanguageHint;
use crate::audio::domain::speech_recognizer::SpeechRecognizer;
use crate::audio::domain::transcribe_options::TranscribeOptions;
use crate::audio::domain::transcript::{Transcript, TranscriptSegment};

/// Speech recognizer using whisper.cpp via whisper-rs.
#[derive(Debug)]
pub struct WhisperRecognizer {
    model_path: PathBuf,
}

impl WhisperRecognizer {
    pub fn new(model_path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !model_path.is_file() {
            return Err(format!("Whisper model not found at: {}", model_path.display()).into());
        }
        Ok(Self {
            model_path: model_path.to_path_buf(),
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SpeechRecognizer for WhisperRecognizer {
    fn transcribe(
        &self,
        audio: &AudioSegment,
        language: &LanguageHint,
        options: &TranscribeOptions,
    ) -> Result<Transcript, Box<dyn std::error::Error>> {
        let ctx = WhisperContext::new_with_params(
            self.model_path.to_str().ok_or("Invalid model path")?,
            WhisperContextParameters::default(),
        )
        .map_err(|e| format!("Failed to load Whisper model: {e}"))?;

        let mut state = ctx
            .create_state()
            .map_err(|e| format!("Failed to create Whisper state: {e}"))?;

        let mut params = FullParams::new(SamplingStrategy::Greedy { best_of: 1 });
        // No language -> whisper.cpp auto-detects
        params.set_language(language.as_code());
        params.set_translate(options.translate);
        if let Some(ref prompt) = options.initial_prompt {
            params.set_initial_prompt(prompt);
        }
        if let Some(temperature) = options.temperature {
            params.set_temperature(temperature);
        }
        params.set_token_timestamps(true);
        params.set_print_special(false);
        params.set_print_progress(false);
        params.set_print_realtime(false);
        params.set_print_timestamps(false);
        let threads = options.threads.unwrap_or_else(|| num_cpus().min(4));
        params.set_n_threads(threads as i32);

        state
            .full(params, audio.samples())
            .map_err(|e| format!("Whisper inference failed: {e}"))?;

        let mut text = String::new();
        let mut segments = Vec::new();
        let num_segments = state.full_n_segments();

        for seg_idx in 0..num_segments {
            let segment = match state.get_segment(seg_idx) {
                Some(s) => s,
                None => continue,
            };

            let mut seg_text = String::new();
            let mut start_time: Option<f64> = None;
            let mut end_time = 0.0f64;

            let n_tokens = segment.n_tokens();
            for tok_idx in 0..n_tokens {
                let token = match segment.get_token(tok_idx) {
                    Some(t) => t,
                    None => continue,
                };

                let tok_text = match token.to_str() {
                    Ok(t) => t,
                    Err(_) => continue,
                };

                // Skip special tokens (start with [, like [_BEG_], [_SOT_], etc.)
                let trimmed = tok_text.trim();
                if trimmed.is_empty() || trimmed.starts_with('[') || trimmed.starts_with('<') {
                    continue;
                }

                // Token timestamps are in centiseconds (10ms units)
                let token_data = token.token_data();
                let t0 = token_data.t0 as f64 / 100.0;
                let t1 = token_data.t1 as f64 / 100.0;
                if start_time.is_none() {
                    start_time = Some(t0);
                }
                end_time = end_time.max(t1);

                seg_text.push_str(tok_text);
            }

            if seg_text.trim().is_empty() {
                continue;
            }

            text.push_str(&seg_text);
            segments.push(TranscriptSegment {
                text: seg_text.trim().to_string(),
                start_time: start_time.unwrap_or(0.0),
                end_time,
            });
        }

        Ok(Transcript::new(text, segments))
    }
}

fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_nonexistent_path_returns_error() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/model.bin"));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_nonexistent_path_error_message() {
        let result = WhisperRecognizer::new(Path::new("/nonexistent/model.bin"));
        let err = result.unwrap_err().to_string();
        assert!(
            err.contains("not found"),
            "Expected 'not found' in error, got: {err}"
        );
    }

    #[test]
    fn test_new_keeps_model_path() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let recognizer = WhisperRecognizer::new(tmp.path()).unwrap();
        assert_eq!(recognizer.model_path(), tmp.path());
    }

    #[test]
    #[ignore] // Requires downloading the tiny Whisper model
    fn test_transcribe_does_not_crash_on_sine_wave() {
        use crate::audio::domain::recognizer_loader::RecognizerLoader;
        use crate::audio::infrastructure::whisper_loader::WhisperLoader;

        let recognizer = WhisperLoader::new()
            .load("tiny")
            .expect("Failed to load tiny model");

        let sample_rate = 16000u32;
        let len = (3.0 * sample_rate as f64) as usize;
        let samples: Vec<f32> = (0..len)
            .map(|i| {
                let t = i as f64 / sample_rate as f64;
                (2.0 * std::f64::consts::PI * 440.0 * t).sin() as f32
            })
            .collect();
        let audio = AudioSegment::new(samples, sample_rate);

        let result = recognizer.transcribe(
            &audio,
            &LanguageHint::Auto,
            &TranscribeOptions::default(),
        );
        assert!(result.is_ok(), "Transcription should not error: {result:?}");
    }
}
