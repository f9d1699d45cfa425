/// Inference options forwarded to the recognizer.
///
/// The pipeline does not interpret these; they map directly onto the
/// underlying model's parameters. Unset fields keep the model defaults.
#[derive(Clone, Debug, Default)]
pub struct TranscribeOptions {
    /// Translate speech to English instead of transcribing verbatim.
    pub translate: bool,
    /// Text used to prime the decoder (names, vocabulary, spelling).
    pub initial_prompt: Option<String>,
    /// Sampling temperature.
    pub temperature: Option<f32>,
    /// Inference thread count. Derived from available parallelism when unset.
    pub threads: Option<usize>,
}
