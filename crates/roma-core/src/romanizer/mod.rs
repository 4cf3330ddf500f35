//! The romanization pipeline.
//!
//! ```text
//! route_to_japanese ─yes─▶ tokenize ─▶ expand_readings ─┐
//!         │no                                            ▼
//!         └──────────────────────────────▶ transliterate ─▶ insert_word_breaks ─▶ collapse_spaces
//! ```

mod cell;

#[cfg(test)]
mod tests;

use std::borrow::Cow;
use std::sync::{Arc, OnceLock};

use tracing::{debug, debug_span};

use crate::expander::expand_readings;
use crate::fault::{Fault, FaultSink, TracingSink};
use crate::normalize::{collapse_spaces, insert_word_breaks};
use crate::settings::settings;
use crate::tokenizer::{default_tokenizer, Tokenizer, TokenizerBuilder};
use crate::translit::transliterate;
use crate::unicode::contains_japanese_kana;

use cell::{ProfileGate, TokenizerCell};

pub use cell::TokenizerFactory;

/// Romanization service. Owns the lazily built tokenizer and language
/// model, so one instance should be shared (`Arc<Romanizer>`) rather than
/// created per call.
pub struct Romanizer {
    tokenizer: TokenizerCell,
    profiles: ProfileGate,
    sink: Arc<dyn FaultSink>,
}

impl Default for Romanizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Romanizer {
    /// [`default_tokenizer`], faults logged through `tracing`.
    pub fn new() -> Self {
        Self::with_factory(Box::new(default_tokenizer))
    }

    /// Use a lattice tokenizer configured by `builder`. Loading happens on
    /// the first Japanese input, not here.
    pub fn with_builder(builder: TokenizerBuilder) -> Self {
        Self::with_factory(Box::new(move || {
            let tokenizer: Arc<dyn Tokenizer> = Arc::new(builder.build()?);
            Ok(tokenizer)
        }))
    }

    pub fn with_factory(factory: TokenizerFactory) -> Self {
        Self {
            tokenizer: TokenizerCell::new(factory),
            profiles: ProfileGate::new(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the fault sink.
    pub fn fault_sink(mut self, sink: Arc<dyn FaultSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Whether a language model has been loaded.
    pub fn profiles_loaded(&self) -> bool {
        self.profiles.is_loaded()
    }

    /// Whether the tokenizer has been constructed.
    pub fn tokenizer_ready(&self) -> bool {
        self.tokenizer.is_ready()
    }

    /// Decide whether `text` goes through reading expansion.
    ///
    /// Any kana answers yes without touching the profiles. Otherwise the
    /// language model is loaded (once) from `profiles`, a list of ISO 639-1
    /// codes such as `["ja", "zh"]`, and asked. Every failure on that path
    /// answers no.
    pub fn route_to_japanese(&self, text: &str, profiles: &[String]) -> bool {
        if contains_japanese_kana(text) {
            return true;
        }
        let model = match self.profiles.get(profiles) {
            Ok(model) => model,
            Err(err) => {
                debug!(error = %err, "language profiles unavailable");
                return false;
            }
        };
        let mut detector = model.detector();
        detector.append(text);
        match detector.detect() {
            Ok(language) => language == settings().detector.target_language,
            Err(err) => {
                debug!(error = %err, "language detection failed");
                false
            }
        }
    }

    /// Romanize `text`. Never fails; faults go to the sink.
    pub fn romanize(&self, text: &str, profiles: &[String]) -> String {
        let _span = debug_span!("romanize", len = text.len()).entered();
        let text = if self.route_to_japanese(text, profiles) {
            self.expand(text)
        } else {
            Cow::Borrowed(text)
        };
        collapse_spaces(&insert_word_breaks(&transliterate(&text)))
    }

    fn expand<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match self.tokenizer.get() {
            Ok(tokenizer) => {
                let tokens = tokenizer.tokenize(text);
                Cow::Owned(expand_readings(&tokens, self.sink.as_ref()))
            }
            Err(err) => {
                self.sink.report(&Fault::TokenizerUnavailable(err));
                Cow::Borrowed(text)
            }
        }
    }
}

/// The process-wide romanizer behind [`romanize`].
pub fn default_romanizer() -> &'static Romanizer {
    static DEFAULT: OnceLock<Romanizer> = OnceLock::new();
    DEFAULT.get_or_init(Romanizer::new)
}

/// Romanize with the default romanizer (default tokenizer, tracing sink).
pub fn romanize(text: &str, profiles: &[String]) -> String {
    default_romanizer().romanize(text, profiles)
}
