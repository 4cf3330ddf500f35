use tracing::{debug, debug_span};

use super::{DetectError, LanguageModel};
use crate::settings::settings;

/// Accumulates text and classifies it against a [`LanguageModel`].
pub struct Detector<'a> {
    model: &'a LanguageModel,
    text: String,
}

impl<'a> Detector<'a> {
    pub(super) fn new(model: &'a LanguageModel) -> Self {
        Self {
            model,
            text: String::new(),
        }
    }

    pub fn append(&mut self, text: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(text);
    }

    /// The most probable language, if it reaches the configured threshold.
    pub fn detect(&self) -> Result<String, DetectError> {
        let (language, probability) = self
            .probabilities()?
            .into_iter()
            .next()
            .ok_or(DetectError::NoFeatures)?;
        if probability >= settings().detector.prob_threshold {
            Ok(language)
        } else {
            Err(DetectError::Ambiguous {
                language,
                probability,
            })
        }
    }

    /// Every language with its confidence, most probable first.
    ///
    /// Text without letters, or text `lingua` cannot score at all, has no
    /// features.
    pub fn probabilities(&self) -> Result<Vec<(String, f64)>, DetectError> {
        let _span = debug_span!("detect", len = self.text.len()).entered();
        if !self.text.chars().any(char::is_alphabetic) {
            return Err(DetectError::NoFeatures);
        }
        let ranked: Vec<(String, f64)> = self
            .model
            .inner()
            .compute_language_confidence_values(self.text.as_str())
            .into_iter()
            .map(|(language, confidence)| (language.iso_code_639_1().to_string(), confidence))
            .collect();
        debug!(top = ?ranked.first(), "scored languages");
        match ranked.first() {
            Some((_, confidence)) if *confidence > 0.0 => Ok(ranked),
            _ => Err(DetectError::NoFeatures),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LanguageModel {
        let codes = ["ja", "zh", "ko", "en"].map(String::from);
        LanguageModel::from_profiles(&codes).unwrap()
    }

    fn detect(model: &LanguageModel, text: &str) -> Result<String, DetectError> {
        let mut detector = model.detector();
        detector.append(text);
        detector.detect()
    }

    #[test]
    fn test_detect_best_language() {
        let model = model();
        assert_eq!(detect(&model, "さくらが咲いた").unwrap(), "ja");
        assert_eq!(detect(&model, "사랑해요").unwrap(), "ko");
        assert_eq!(detect(&model, "I love you more than words").unwrap(), "en");
    }

    #[test]
    fn test_han_only_reads_as_chinese() {
        let model = model();
        assert_eq!(detect(&model, "我们是好朋友").unwrap(), "zh");
    }

    #[test]
    fn test_no_features() {
        let model = model();
        assert!(matches!(detect(&model, "123 !?"), Err(DetectError::NoFeatures)));
        assert!(matches!(detect(&model, ""), Err(DetectError::NoFeatures)));
    }

    #[test]
    fn test_probabilities_ranked() {
        let model = model();
        let mut detector = model.detector();
        detector.append("ｻｸﾗ");
        let ranked = detector.probabilities().unwrap();
        assert!(ranked.len() <= 4);
        assert_eq!(ranked[0].0, "ja");
        assert!(ranked.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[test]
    fn test_append_joins_fragments() {
        let model = model();
        let mut detector = model.detector();
        detector.append("123");
        assert!(detector.probabilities().is_err());
        detector.append("사랑");
        assert_eq!(detector.detect().unwrap(), "ko");
    }
}
