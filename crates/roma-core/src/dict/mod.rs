//! Surface-keyed dictionary and connection-matrix storage.
//!
//! `SurfaceDictionary` maps surface forms to readings and word costs.
//! `ConnectionMatrix` stores POS bigram transition costs for Viterbi scoring.

pub mod connection;
mod csv;
mod entry;
mod surface_dict;
mod surface_dict_io;

pub use csv::{parse_csv, CsvStats};
pub use entry::DictEntry;
pub use surface_dict::SurfaceDictionary;

use std::io;

/// Unified error type for dictionary and connection-matrix I/O.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid header (too short)")]
    InvalidHeader,

    #[error("invalid magic bytes (expected RMDX)")]
    InvalidMagic,

    #[error("unsupported version: {0}")]
    UnsupportedVersion(u8),

    #[error("serialization error: {0}")]
    Serialize(bincode::Error),

    #[error("deserialization error: {0}")]
    Deserialize(bincode::Error),

    #[error("parse error: {0}")]
    Parse(String),
}

/// A dictionary surface that is a prefix of the searched text.
pub struct SearchResult<'a> {
    pub surface: &'a str,
    pub entries: &'a [DictEntry],
}

pub trait Dictionary: Send + Sync {
    /// All analyses of an exact surface form, cheapest first.
    fn lookup(&self, surface: &str) -> &[DictEntry];

    /// Every dictionary surface that is a prefix of `text`, shortest first.
    fn common_prefix_search<'a>(&'a self, text: &'a str) -> Vec<SearchResult<'a>>;
}
