//! [`Tokenizer`] over lindera's embedded MeCab IPADIC.

use lindera::dictionary::{load_dictionary_from_kind, DictionaryKind};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;
use tracing::{debug_span, warn};

use super::{Token, Tokenizer, TokenizerError};

/// Column of the katakana reading in IPADIC token details:
/// `pos1,pos2,pos3,pos4,conj_type,conj_form,base,reading,pronunciation`.
const READING_DETAIL: usize = 7;

/// Full-dictionary tokenizer. Loading decompresses the embedded IPADIC, so
/// build it once and share it.
pub struct IpadicTokenizer {
    inner: lindera::tokenizer::Tokenizer,
}

impl IpadicTokenizer {
    pub fn new() -> Result<Self, TokenizerError> {
        let _span = debug_span!("load_ipadic").entered();
        let dictionary = load_dictionary_from_kind(DictionaryKind::IPADIC)
            .map_err(|e| TokenizerError::Unavailable(format!("ipadic: {e}")))?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        Ok(Self {
            inner: lindera::tokenizer::Tokenizer::new(segmenter),
        })
    }
}

impl Tokenizer for IpadicTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        let _span = debug_span!("tokenize_ipadic", len = text.len()).entered();
        let mut tokens = match self.inner.tokenize(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(error = %e, "ipadic tokenization failed, keeping text whole");
                return vec![Token::unknown(text)];
            }
        };
        tokens
            .iter_mut()
            .map(|token| {
                let surface = token.text.to_string();
                let unknown = token.word_id.is_unknown();
                token_from_details(surface, unknown, &token.details())
            })
            .collect()
    }
}

/// Unknown words come from `unk.def` or carry the single detail `UNK`.
/// Known words whose reading column is missing or `*` become known tokens
/// without a reading.
fn token_from_details(surface: String, unknown: bool, details: &[&str]) -> Token {
    if unknown || details.first().map_or(true, |d| *d == "UNK") {
        return Token::unknown(surface);
    }
    let reading = details
        .get(READING_DETAIL)
        .filter(|r| !r.is_empty() && **r != "*")
        .map(|r| r.to_string());
    Token::known(surface, reading)
}
