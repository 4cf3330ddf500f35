//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tokenizer: TokenizerSettings,
    pub detector: DetectorSettings,
    pub expander: ExpanderSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenizerSettings {
    pub unknown_word_cost: i16,
    pub segment_penalty: i64,
    pub max_unknown_run: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DetectorSettings {
    /// Language code that routes text to the reading expander.
    pub target_language: String,
    /// Passed to `lingua`; above zero, close calls between languages come
    /// back unscored.
    pub min_relative_distance: f64,
    pub prob_threshold: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpanderSettings {
    /// Whitespace directly before these is removed after expansion.
    pub closing_punctuation: Vec<char>,
    /// Surfaces that never get a trailing space (the parts of `<br>`).
    pub unspaced_surfaces: Vec<String>,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn invalid(field: &str, reason: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    macro_rules! check_non_negative {
        ($section:ident . $field:ident) => {
            if s.$section.$field < 0 {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be non-negative",
                ));
            }
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(invalid(
                    concat!(stringify!($section), ".", stringify!($field)),
                    "must be positive",
                ));
            }
        };
    }

    check_non_negative!(tokenizer.unknown_word_cost);
    check_non_negative!(tokenizer.segment_penalty);
    check_positive_usize!(tokenizer.max_unknown_run);

    if s.detector.target_language.trim().is_empty() {
        return Err(invalid("detector.target_language", "must not be empty"));
    }
    if !(0.0..=0.99).contains(&s.detector.min_relative_distance) {
        return Err(invalid("detector.min_relative_distance", "must be within 0.0..=0.99"));
    }
    if !(0.0..=1.0).contains(&s.detector.prob_threshold) {
        return Err(invalid("detector.prob_threshold", "must be within 0.0..=1.0"));
    }

    if s.expander.unspaced_surfaces.iter().any(|x| x.is_empty()) {
        return Err(invalid("expander.unspaced_surfaces", "entries must not be empty"));
    }

    Ok(())
}
