//! Replace known words with their katakana readings.

use tracing::debug;

use crate::fault::{Fault, FaultSink};
use crate::normalize::strip_space_before;
use crate::settings::settings;
use crate::tokenizer::Token;

/// Rebuild text from tokens, substituting readings for known words.
///
/// Tokens inside a `[...]` annotation are copied verbatim. Everything else is
/// followed by one space unless it is part of a `<br>` tag or the output
/// already ends in whitespace. A known word without a reading keeps its
/// surface and is reported to `sink`.
pub fn expand_readings(tokens: &[Token], sink: &dyn FaultSink) -> String {
    let s = &settings().expander;
    let mut out = String::new();
    let mut in_markup = false;

    for token in tokens {
        let surface = token.surface.as_str();
        if surface.contains(']') {
            out.push_str(surface);
            in_markup = false;
            continue;
        }
        if surface.contains('[') {
            out.push_str(surface);
            in_markup = true;
            continue;
        }
        if in_markup {
            out.push_str(surface);
            continue;
        }

        if token.known {
            match token.reading() {
                Ok(reading) => out.push_str(reading),
                Err(err) => {
                    out.push_str(surface);
                    sink.report(&Fault::ReadingLookup {
                        surface: err.surface,
                    });
                }
            }
        } else {
            out.push_str(surface);
        }

        let unspaced = s.unspaced_surfaces.iter().any(|u| u == surface);
        let ends_in_space = out.chars().next_back().is_some_and(char::is_whitespace);
        if !unspaced && !ends_in_space {
            out.push(' ');
        }
    }

    debug!(tokens = tokens.len(), "expanded readings");
    strip_space_before(out.trim(), &s.closing_punctuation)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::fault::TracingSink;

    fn known(surface: &str, reading: &str) -> Token {
        Token::known(surface, Some(reading.to_string()))
    }

    fn unknown(surface: &str) -> Token {
        Token::unknown(surface)
    }

    fn expand(tokens: &[Token]) -> String {
        expand_readings(tokens, &TracingSink)
    }

    #[test]
    fn test_readings_spaced() {
        let tokens = [known("東京", "トウキョウ"), known("の", "ノ"), known("空", "ソラ")];
        assert_eq!(expand(&tokens), "トウキョウ ノ ソラ");
    }

    #[test]
    fn test_unknown_keeps_surface() {
        let tokens = [unknown("Love"), known("花", "ハナ")];
        assert_eq!(expand(&tokens), "Love ハナ");
    }

    #[test]
    fn test_bracket_annotation_verbatim() {
        let tokens = [
            unknown("["),
            known("注", "チュウ"),
            unknown("]"),
            known("赤い", "アカイ"),
            known("花", "ハナ"),
        ];
        assert_eq!(expand(&tokens), "[注]アカイ ハナ");
    }

    #[test]
    fn test_br_tag_unspaced() {
        let tokens = [
            known("空", "ソラ"),
            unknown("<"),
            unknown("br"),
            unknown(">"),
            known("花", "ハナ"),
        ];
        assert_eq!(expand(&tokens), "ソラ <br>ハナ");
    }

    #[test]
    fn test_no_double_space_after_whitespace_token() {
        // The whitespace token itself is kept; collapsing happens later.
        let tokens = [known("空", "ソラ"), unknown(" "), known("花", "ハナ")];
        assert_eq!(expand(&tokens), "ソラ  ハナ");
        let tokens = [known("空", "ソラ"), unknown("\n"), known("花", "ハナ")];
        assert_eq!(expand(&tokens), "ソラ \nハナ");
    }

    #[test]
    fn test_space_before_closing_punctuation_removed() {
        let tokens = [known("花", "ハナ"), unknown("!"), unknown("?"), unknown(":")];
        assert_eq!(expand(&tokens), "ハナ!?:");
    }

    #[test]
    fn test_nested_brackets_last_wins() {
        // The inner `]` ends markup even though an outer `[` is still open.
        let tokens = [
            unknown("["),
            unknown("["),
            known("花", "ハナ"),
            unknown("]"),
            known("空", "ソラ"),
            unknown("]"),
        ];
        assert_eq!(expand(&tokens), "[[花]ソラ ]");
    }

    #[test]
    fn test_unbalanced_open_bracket() {
        let tokens = [known("空", "ソラ"), unknown("["), known("花", "ハナ")];
        assert_eq!(expand(&tokens), "ソラ [花");
    }

    #[test]
    fn test_missing_reading_reported() {
        let seen = Mutex::new(Vec::new());
        let sink = |fault: &Fault| {
            if let Fault::ReadingLookup { surface } = fault {
                seen.lock().unwrap().push(surface.clone());
            }
        };
        let tokens = [
            Token::known("謎", None),
            known("の", "ノ"),
            Token::known("謎", None),
        ];
        assert_eq!(expand_readings(&tokens, &sink), "謎 ノ 謎");
        assert_eq!(*seen.lock().unwrap(), vec!["謎", "謎"]);
    }

    #[test]
    fn test_empty() {
        assert_eq!(expand(&[]), "");
    }
}
