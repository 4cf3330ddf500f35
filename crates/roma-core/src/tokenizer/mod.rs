//! Morphological tokenization via lattice construction and Viterbi search.
//!
//! The romanizer only sees the [`Tokenizer`] trait. [`LatticeTokenizer`] is
//! the bundled implementation: it builds a character lattice from
//! surface-keyed dictionary lookups plus unknown-word nodes, then keeps the
//! cheapest path. With the `ipadic` feature, [`default_tokenizer`] returns
//! [`IpadicTokenizer`] over the full MeCab IPADIC instead.

mod chars;
mod cost;
#[cfg(feature = "ipadic")]
mod ipadic;
mod lattice;
pub(crate) mod testutil;
mod viterbi;


use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::debug_span;

use crate::dict::connection::ConnectionMatrix;
use crate::dict::{DictError, Dictionary, SurfaceDictionary};

use cost::DefaultCostFunction;
use viterbi::viterbi_best;

pub use chars::CharClass;
#[cfg(feature = "ipadic")]
pub use ipadic::IpadicTokenizer;
pub use lattice::{build_lattice, Lattice, LatticeNode};

/// One token of tokenizer output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub surface: String,
    /// Whether the surface was found in the dictionary.
    pub known: bool,
    reading: Option<String>,
}

/// A known token whose dictionary entry has no reading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("dictionary entry for {surface:?} has no reading")]
pub struct ReadingError {
    pub surface: String,
}

impl Token {
    pub fn known(surface: impl Into<String>, reading: Option<String>) -> Self {
        Self {
            surface: surface.into(),
            known: true,
            reading,
        }
    }

    pub fn unknown(surface: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            known: false,
            reading: None,
        }
    }

    /// The katakana reading of a known token.
    ///
    /// Unknown tokens have no reading by definition and also return the error;
    /// callers check [`Token::known`] first.
    pub fn reading(&self) -> Result<&str, ReadingError> {
        self.reading.as_deref().ok_or_else(|| ReadingError {
            surface: self.surface.clone(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TokenizerError {
    #[error("failed to load {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: DictError,
    },
    #[error("dictionary error: {0}")]
    Dict(#[from] DictError),
    #[error("tokenizer unavailable: {0}")]
    Unavailable(String),
}

/// Splits text into tokens with optional readings.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<Token>;
}

/// The tokenizer [`crate::Romanizer::new`] loads: full IPADIC when the
/// `ipadic` feature is enabled, otherwise the embedded lyric lexicon.
pub fn default_tokenizer() -> Result<Arc<dyn Tokenizer>, TokenizerError> {
    #[cfg(feature = "ipadic")]
    {
        Ok(Arc::new(IpadicTokenizer::new()?))
    }
    #[cfg(not(feature = "ipadic"))]
    {
        Ok(Arc::new(LatticeTokenizer::builder().build()?))
    }
}

pub struct LatticeTokenizer {
    dict: Arc<dyn Dictionary>,
    conn: Option<Arc<ConnectionMatrix>>,
}

impl LatticeTokenizer {
    pub fn new(dict: Arc<dyn Dictionary>, conn: Option<Arc<ConnectionMatrix>>) -> Self {
        Self { dict, conn }
    }

    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }
}

impl Tokenizer for LatticeTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        if text.is_empty() {
            return Vec::new();
        }
        let _span = debug_span!("tokenize", len = text.len()).entered();
        let cost_fn = DefaultCostFunction::new(self.conn.as_deref());
        let lattice = build_lattice(self.dict.as_ref(), text);
        viterbi_best(&lattice, &cost_fn)
            .into_iter()
            .map(|idx| {
                let node = &lattice.nodes[idx];
                Token {
                    surface: node.surface.clone(),
                    known: node.known,
                    reading: node.reading.clone(),
                }
            })
            .collect()
    }
}

/// Where the dictionary comes from.
#[derive(Debug, Clone, Default)]
enum DictSource {
    #[default]
    Embedded,
    Csv(PathBuf),
    Binary(PathBuf),
}

/// Builder for [`LatticeTokenizer`]. With no paths set, the embedded lyric
/// lexicon is used and no connection matrix is loaded.
#[derive(Debug, Clone, Default)]
pub struct TokenizerBuilder {
    dict: DictSource,
    conn: Option<PathBuf>,
}

impl TokenizerBuilder {
    /// Load an IPADIC-style CSV dictionary.
    pub fn dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dict = DictSource::Csv(path.into());
        self
    }

    /// Load a dictionary compiled with `SurfaceDictionary::save`.
    pub fn binary_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dict = DictSource::Binary(path.into());
        self
    }

    /// Load a MeCab `matrix.def` connection matrix.
    pub fn connection_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.conn = Some(path.into());
        self
    }

    pub fn build(&self) -> Result<LatticeTokenizer, TokenizerError> {
        let dict = match &self.dict {
            DictSource::Embedded => SurfaceDictionary::embedded()?,
            DictSource::Csv(path) => load(path, |p| {
                let text = fs::read_to_string(p)?;
                SurfaceDictionary::from_csv(&text)
            })?,
            DictSource::Binary(path) => load(path, SurfaceDictionary::open)?,
        };
        let conn = match &self.conn {
            Some(path) => Some(Arc::new(load(path, ConnectionMatrix::open)?)),
            None => None,
        };
        Ok(LatticeTokenizer::new(Arc::new(dict), conn))
    }
}

fn load<T>(
    path: &Path,
    f: impl FnOnce(&Path) -> Result<T, DictError>,
) -> Result<T, TokenizerError> {
    f(path).map_err(|source| TokenizerError::Load {
        path: path.to_path_buf(),
        source,
    })
}
