use std::collections::HashSet;
use std::str::FromStr;

use lingua::{IsoCode639_1, LanguageDetector, LanguageDetectorBuilder};
use tracing::{debug, debug_span};

use super::{DetectError, Detector};
use crate::settings::settings;

/// A loaded `lingua` detector restricted to a fixed language set.
pub struct LanguageModel {
    languages: Vec<String>,
    detector: LanguageDetector,
}

impl std::fmt::Debug for LanguageModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageModel")
            .field("languages", &self.languages)
            .finish_non_exhaustive()
    }
}

impl LanguageModel {
    /// Build a model from ISO 639-1 codes such as `"ja"` or `"zh"`.
    ///
    /// Codes are trimmed and lowercased. Only languages compiled into the
    /// crate are accepted, and `lingua` needs at least two to compare.
    pub fn from_profiles(profiles: &[String]) -> Result<Self, DetectError> {
        let _span = debug_span!("load_language_model", count = profiles.len()).entered();
        if profiles.is_empty() {
            return Err(DetectError::NoProfiles);
        }
        let mut seen = HashSet::new();
        let mut codes = Vec::with_capacity(profiles.len());
        let mut languages = Vec::with_capacity(profiles.len());
        for raw in profiles {
            let name = raw.trim().to_ascii_lowercase();
            let code = IsoCode639_1::from_str(&name)
                .map_err(|_| DetectError::UnknownLanguage(raw.clone()))?;
            if !seen.insert(code) {
                return Err(DetectError::DuplicateLanguage(name));
            }
            codes.push(code);
            languages.push(name);
        }
        if codes.len() < 2 {
            return Err(DetectError::TooFewLanguages(codes.len()));
        }
        let detector = LanguageDetectorBuilder::from_iso_codes_639_1(&codes)
            .with_minimum_relative_distance(settings().detector.min_relative_distance)
            .with_preloaded_language_models()
            .build();
        debug!(languages = ?languages, "language model loaded");
        Ok(Self {
            languages,
            detector,
        })
    }

    /// Language codes in the order they were given.
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub(super) fn inner(&self) -> &LanguageDetector {
        &self.detector
    }

    pub fn detector(&self) -> Detector<'_> {
        Detector::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_from_codes() {
        let model = LanguageModel::from_profiles(&codes(&["ja", " ZH ", "en"])).unwrap();
        assert_eq!(model.languages(), ["ja", "zh", "en"]);
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            LanguageModel::from_profiles(&[]),
            Err(DetectError::NoProfiles)
        ));
    }

    #[test]
    fn test_rejects_unknown_code() {
        let err = LanguageModel::from_profiles(&codes(&["ja", "xx"])).unwrap_err();
        assert!(matches!(err, DetectError::UnknownLanguage(ref c) if c == "xx"));
        // Valid ISO code, but not compiled in.
        let err = LanguageModel::from_profiles(&codes(&["ja", "fr"])).unwrap_err();
        assert!(matches!(err, DetectError::UnknownLanguage(_)));
    }

    #[test]
    fn test_rejects_duplicate() {
        let err = LanguageModel::from_profiles(&codes(&["ja", "JA"])).unwrap_err();
        assert!(matches!(err, DetectError::DuplicateLanguage(ref c) if c == "ja"));
    }

    #[test]
    fn test_rejects_single_language() {
        let err = LanguageModel::from_profiles(&codes(&["ja"])).unwrap_err();
        assert!(matches!(err, DetectError::TooFewLanguages(1)));
    }
}
