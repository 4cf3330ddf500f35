//! Character-level Unicode classification for ideographic scripts.
//!
//! Checks are block-level: a few unassigned codepoints inside each block are
//! accepted, which never matters for lyric text.

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes the prolonged
/// sound mark ー (U+30FC).
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Katakana Phonetic Extensions (U+31F0..U+31FF), the small kana used for Ainu.
pub fn is_katakana_phonetic_ext(c: char) -> bool {
    ('\u{31F0}'..='\u{31FF}').contains(&c)
}

/// Kana that only Japanese uses. Kanji are shared with Chinese, so they are
/// not a Japanese signal on their own.
pub fn is_japanese_kana(c: char) -> bool {
    is_hiragana(c) || is_katakana(c) || is_katakana_phonetic_ext(c)
}

pub fn is_kanji(c: char) -> bool {
    ('\u{4E00}'..='\u{9FFF}').contains(&c)
        || ('\u{3400}'..='\u{4DBF}').contains(&c)
        || ('\u{20000}'..='\u{2A6DF}').contains(&c)
}

/// CJK ideographs plus the surrounding CJK blocks: compatibility forms,
/// radicals, symbols and punctuation, enclosed letters and ideographic
/// description characters.
pub fn is_cjk(c: char) -> bool {
    is_kanji(c)
        || matches!(c,
            '\u{3300}'..='\u{33FF}'     // CJK Compatibility
            | '\u{FE30}'..='\u{FE4F}'   // CJK Compatibility Forms
            | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
            | '\u{2F800}'..='\u{2FA1F}' // CJK Compatibility Ideographs Supplement
            | '\u{2E80}'..='\u{2EFF}'   // CJK Radicals Supplement
            | '\u{3000}'..='\u{303F}'   // CJK Symbols and Punctuation
            | '\u{3200}'..='\u{32FF}'   // Enclosed CJK Letters and Months
            | '\u{2F00}'..='\u{2FDF}'   // Kangxi Radicals
            | '\u{2FF0}'..='\u{2FFF}'   // Ideographic Description Characters
        )
}

/// Hangul Jamo, Hangul Compatibility Jamo and Hangul Syllables.
pub fn is_hangul(c: char) -> bool {
    matches!(c,
        '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' | '\u{AC00}'..='\u{D7AF}'
    )
}

pub fn is_ideographic(c: char) -> bool {
    is_cjk(c) || is_japanese_kana(c) || is_hangul(c)
}

/// True if any character of `text` is ideographic. Callers use this to skip
/// romanization entirely for text that is already readable.
pub fn is_ideographic_text(text: &str) -> bool {
    text.chars().any(is_ideographic)
}

/// True if `text` contains kana, which is enough to call it Japanese without
/// running statistical detection.
pub fn contains_japanese_kana(text: &str) -> bool {
    text.chars().any(is_japanese_kana)
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            // U+3097..U+3098 are unassigned and U+3099..U+309C are combining
            // marks shared by both scripts; only letters shift.
            if ('\u{3041}'..='\u{3096}').contains(&c) || ('\u{309D}'..='\u{309E}').contains(&c) {
                char::from_u32(c as u32 + 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hiragana_to_katakana() {
        assert_eq!(hiragana_to_katakana("きょうは"), "キョウハ");
        assert_eq!(hiragana_to_katakana("らーめん"), "ラーメン");
        assert_eq!(hiragana_to_katakana(""), "");
        assert_eq!(hiragana_to_katakana("abc"), "abc");
        assert_eq!(hiragana_to_katakana("カタカナ"), "カタカナ");
        assert_eq!(hiragana_to_katakana("ゝ"), "ヽ");
    }

    #[test]
    fn test_char_classification() {
        assert!(is_hiragana('あ'));
        assert!(!is_hiragana('ア'));
        assert!(is_katakana('ア'));
        assert!(is_katakana('ー'));
        assert!(!is_katakana('あ'));
        assert!(is_katakana_phonetic_ext('ㇰ'));
        assert!(is_kanji('漢'));
        assert!(!is_kanji('あ'));
    }

    #[test]
    fn test_ideographic_blocks() {
        // CJK Unified Ideographs
        assert!(is_ideographic('花'));
        // Extension B
        assert!(is_ideographic('\u{20B9F}'));
        // CJK Symbols and Punctuation
        assert!(is_ideographic('。'));
        // Compatibility Ideographs
        assert!(is_ideographic('\u{F900}'));
        assert!(is_ideographic('ひ'));
        assert!(is_ideographic('カ'));
        // Hangul Syllables, Jamo, Compatibility Jamo
        assert!(is_ideographic('한'));
        assert!(is_ideographic('\u{1100}'));
        assert!(is_ideographic('ㄱ'));
        assert!(!is_ideographic('a'));
        assert!(!is_ideographic('é'));
        assert!(!is_ideographic('Ж'));
    }

    #[test]
    fn test_is_ideographic_text() {
        assert!(is_ideographic_text("漢字"));
        assert!(is_ideographic_text("ひらがな"));
        assert!(is_ideographic_text("カタカナ"));
        assert!(is_ideographic_text("안녕하세요"));
        assert!(is_ideographic_text("Love 愛"));
        assert!(!is_ideographic_text("Hello World"));
        assert!(!is_ideographic_text("123 !?"));
        assert!(!is_ideographic_text(""));
    }

    #[test]
    fn test_contains_japanese_kana() {
        assert!(contains_japanese_kana("こんにちは"));
        assert!(contains_japanese_kana("Hello ワールド"));
        assert!(contains_japanese_kana("ㇱ"));
        // Kanji alone is ambiguous with Chinese
        assert!(!contains_japanese_kana("赤花"));
        assert!(!contains_japanese_kana("안녕"));
        assert!(!contains_japanese_kana("Hello"));
    }
}
