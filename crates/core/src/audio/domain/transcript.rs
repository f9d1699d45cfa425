/// One timed span of recognized speech.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub text: String,
    pub start_time: f64,
    pub end_time: f64,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Result of one transcription run: the full recognized text plus the
/// timed segments it was assembled from.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    text: String,
    segments: Vec<TranscriptSegment>,
}

impl Transcript {
    pub fn new(text: String, segments: Vec<TranscriptSegment>) -> Self {
        Self { text, segments }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[TranscriptSegment] {
        &self.segments
    }

    /// The recognized text without surrounding whitespace.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// True when the transcript contains no usable text.
    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_duration() {
        let seg = TranscriptSegment {
            text: "hola".to_string(),
            start_time: 2.0,
            end_time: 2.8,
        };
        assert_relative_eq!(seg.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_trimmed_strips_surrounding_whitespace() {
        let t = Transcript::new(" Hola mundo. \n".to_string(), vec![]);
        assert_eq!(t.trimmed(), "Hola mundo.");
    }

    #[test]
    fn test_whitespace_only_text_is_blank() {
        let t = Transcript::new(" \n\t ".to_string(), vec![]);
        assert!(t.is_blank());
    }

    #[test]
    fn test_nonempty_text_is_not_blank() {
        let t = Transcript::new("texto".to_string(), vec![]);
        assert!(!t.is_blank());
    }
}
