//! Generic script-to-Latin transliteration.

use deunicode::deunicode;

/// Map every non-Latin character to a Latin approximation.
///
/// ASCII passes through untouched. Codepoints missing from the table become
/// `[?]`. Total: never fails.
pub fn transliterate(text: &str) -> String {
    if text.is_ascii() {
        return text.to_string();
    }
    deunicode(text)
}
