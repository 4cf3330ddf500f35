use crate::unicode::{is_hiragana, is_kanji, is_katakana, is_katakana_phonetic_ext};

/// Character class used to build unknown-word nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Space,
    Hiragana,
    Katakana,
    Kanji,
    Alpha,
    Numeric,
    Symbol,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        if c.is_whitespace() {
            Self::Space
        } else if is_hiragana(c) {
            Self::Hiragana
        } else if is_katakana(c) || is_katakana_phonetic_ext(c) {
            Self::Katakana
        } else if is_kanji(c) || ('\u{F900}'..='\u{FAFF}').contains(&c) {
            Self::Kanji
        } else if c.is_numeric() {
            Self::Numeric
        } else if c.is_alphabetic() {
            Self::Alpha
        } else {
            Self::Symbol
        }
    }

    /// Whether consecutive unknown characters of this class form one token.
    ///
    /// Kanji stay single so dictionary words inside a run can still win;
    /// symbols stay single so markup like `<`, `[` is isolated.
    pub fn groups(self) -> bool {
        matches!(
            self,
            Self::Space | Self::Hiragana | Self::Katakana | Self::Alpha | Self::Numeric
        )
    }

    /// Whether the grouped unknown node is added even where a dictionary
    /// word starts. Hiragana runs are only grouped where nothing matched,
    /// so particles and okurigana keep their dictionary entries.
    pub fn groups_over_known(self) -> bool {
        self != Self::Hiragana
    }
}
