//! Statistical language detection, backed by `lingua`.
//!
//! A [`LanguageModel`] is built once from a set of ISO 639-1 codes and
//! shared; a [`Detector`] is cheap and created per classification.

mod detector;
mod model;

pub use detector::Detector;
pub use model::LanguageModel;

#[derive(Debug, thiserror::Error)]
pub enum DetectError {
    #[error("no languages given")]
    NoProfiles,
    #[error("unknown or unsupported language code {0:?}")]
    UnknownLanguage(String),
    #[error("duplicate language: {0}")]
    DuplicateLanguage(String),
    #[error("at least two languages are needed, got {0}")]
    TooFewLanguages(usize),
    #[error("text has no features known to any language")]
    NoFeatures,
    #[error("no language reached the threshold (best {language} at {probability:.3})")]
    Ambiguous { language: String, probability: f64 },
}
