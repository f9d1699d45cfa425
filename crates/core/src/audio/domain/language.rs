/// Spoken-language hint for the recognizer.
///
/// The caller-facing interface uses the literal value `"none"` (any case) to
/// mean "no hint"; that sentinel is normalized here into `Auto`, which makes
/// the recognizer detect the language instead of being told one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LanguageHint {
    /// Let the model detect the spoken language.
    #[default]
    Auto,
    /// ISO 639-1 code of the spoken language, e.g. `"es"`.
    Tag(String),
}

impl LanguageHint {
    /// Parse a caller-supplied hint, normalizing the `"none"` sentinel
    /// (case-insensitive) and empty strings to `Auto`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("none") {
            LanguageHint::Auto
        } else {
            LanguageHint::Tag(trimmed.to_string())
        }
    }

    /// The language code to pass to the model, or `None` for auto-detection.
    pub fn as_code(&self) -> Option<&str> {
        match self {
            LanguageHint::Auto => None,
            LanguageHint::Tag(code) => Some(code),
        }
    }
}
