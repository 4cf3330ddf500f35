//! Lossy romanization of ideographic lyric text.
//!
//! Japanese input is tokenized and known words are replaced by their
//! katakana readings before everything is transliterated to Latin and
//! tidied up. See [`Romanizer`] for the pipeline.

pub mod detect;
pub mod dict;
pub mod expander;
pub mod fault;
pub mod normalize;
pub mod romanizer;
pub mod settings;
pub mod tokenizer;
pub mod translit;
pub mod unicode;

pub use romanizer::{romanize, Romanizer};
pub use unicode::is_ideographic_text;
