use super::*;
use crate::tokenizer::TokenizerError;
use crate::unicode::is_ideographic_text;

#[test]
fn test_latin_text_untouched() {
    let (romanizer, sink) = test_romanizer();
    assert_eq!(romanizer.romanize("Hello World", &[]), "Hello World");
    assert_eq!(romanizer.romanize("HelloWorld", &[]), "Hello World");
    assert_eq!(romanizer.romanize("a   b", &[]), "a b");
    assert_eq!(romanizer.romanize("", &[]), "");
    assert!(!romanizer.tokenizer_ready());
    assert!(sink.take().is_empty());
}

#[test]
fn test_japanese_path_yields_ascii() {
    let (romanizer, sink) = test_romanizer();
    assert_eq!(romanizer.romanize("東京の空", &[]), "toukiyou no sora");
    assert!(romanizer.tokenizer_ready());
    assert!(sink.take().is_empty());
}

#[test]
fn test_unknown_hiragana_kept_as_one_word() {
    let (romanizer, sink) = test_romanizer();
    assert_eq!(romanizer.romanize("ぬるいね", &[]), "nuruine");
    assert_eq!(romanizer.romanize("空はぬるい", &[]), "sora ha nurui");
    assert!(sink.take().is_empty());
}

#[test]
fn test_closing_punctuation_attached() {
    let (romanizer, _) = test_romanizer();
    assert_eq!(romanizer.romanize("赤い花です!", &[]), "akai hana desu!");
}

#[test]
fn test_generic_path_yields_ascii() {
    // No kana and no profiles: transliteration only.
    let (romanizer, _) = test_romanizer();
    let out = romanizer.romanize("赤花", &[]);
    assert!(!out.is_empty());
    assert!(out.is_ascii());
    assert!(!is_ideographic_text(&out));
    assert!(!romanizer.tokenizer_ready());
}

#[test]
fn test_markup_survives() {
    let (romanizer, _) = test_romanizer();
    assert_eq!(
        romanizer.romanize("[x2]赤い花<br>東京の空", &[]),
        "[x2]akai hana <br>toukiyou no sora"
    );
    let out = romanizer.romanize("[注]の花<br>の空", &[]);
    assert!(out.starts_with('['), "{out}");
    assert!(out.ends_with("hana <br>no sora"), "{out}");
}

#[test]
fn test_reading_lookup_fault_continues() {
    let (romanizer, sink) = test_romanizer();
    let out = romanizer.romanize("謎の花", &[]);
    assert!(!out.is_empty());
    assert_eq!(sink.take(), vec!["reading:謎"]);
}

#[test]
fn test_failing_factory_degrades_then_recovers() {
    use std::sync::atomic::{AtomicUsize, Ordering};

    let calls = Arc::new(AtomicUsize::new(0));
    let factory_calls = Arc::clone(&calls);
    let factory: TokenizerFactory = Box::new(move || {
        if factory_calls.fetch_add(1, Ordering::SeqCst) < 2 {
            return Err(TokenizerError::Unavailable("disk on fire".to_string()));
        }
        let tokenizer: Arc<dyn Tokenizer> =
            Arc::new(LatticeTokenizer::new(Arc::new(test_dict()), None));
        Ok(tokenizer)
    });
    let sink = Arc::new(RecordingSink::default());
    let romanizer = Romanizer::with_factory(factory).fault_sink(sink.clone());

    let degraded = romanizer.romanize("こんにちは", &[]);
    assert!(!degraded.is_empty());
    assert!(degraded.is_ascii());
    assert_eq!(sink.take(), vec!["tokenizer"]);

    romanizer.romanize("こんにちは", &[]);
    assert_eq!(sink.take(), vec!["tokenizer"]);
    assert!(!romanizer.tokenizer_ready());

    romanizer.romanize("こんにちは", &[]);
    assert!(sink.take().is_empty());
    assert!(romanizer.tokenizer_ready());

    romanizer.romanize("東京の空", &[]);
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_default_romanizer() {
    let out = crate::romanize("こんにちは", &[]);
    assert!(out.is_ascii());
    assert!(!out.is_empty());
    assert_eq!(crate::romanize("Plain Text", &[]), "Plain Text");
}
