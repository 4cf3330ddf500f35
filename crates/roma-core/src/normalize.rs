//! Whitespace post-processing applied after transliteration.
//!
//! Each function is a single left-to-right scan over chars.

/// Insert a space before every uppercase letter that follows a
/// non-whitespace char. The first char never gets one.
pub fn insert_word_breaks(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    let mut prev: Option<char> = None;
    for c in text.chars() {
        if let Some(p) = prev {
            if c.is_uppercase() && !p.is_whitespace() {
                out.push(' ');
            }
        }
        out.push(c);
        prev = Some(c);
    }
    out
}

/// Replace every run of ASCII spaces with a single space.
pub fn collapse_spaces(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = false;
    for c in text.chars() {
        if c == ' ' {
            if !prev_space {
                out.push(c);
            }
            prev_space = true;
        } else {
            out.push(c);
            prev_space = false;
        }
    }
    out
}

/// Remove any whitespace run that directly precedes one of `punctuation`.
///
/// Whitespace here is the ASCII set `[ \t\n\x0B\f\r]`.
pub fn strip_space_before(text: &str, punctuation: &[char]) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();
    for c in text.chars() {
        if is_pattern_space(c) {
            pending.push(c);
            continue;
        }
        if !punctuation.contains(&c) {
            out.push_str(&pending);
        }
        pending.clear();
        out.push(c);
    }
    out.push_str(&pending);
    out
}

fn is_pattern_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
