use std::sync::{Arc, Mutex};

use roma_core::fault::{Fault, FaultSink};
use roma_core::normalize::strip_space_before;
use roma_core::tokenizer::{LatticeTokenizer, Tokenizer};
use roma_core::translit::transliterate;
use roma_core::{is_ideographic_text, romanize, Romanizer};

#[test]
fn ideographic_classification() {
    assert!(is_ideographic_text("花"));
    assert!(is_ideographic_text("ひらがな"));
    assert!(is_ideographic_text("カタカナ"));
    assert!(is_ideographic_text("사랑"));
    assert!(!is_ideographic_text("plain ascii"));
}

#[test]
fn kana_takes_fast_path() {
    let romanizer = Romanizer::new();
    let out = romanizer.romanize("こんにちは", &[]);
    assert!(!out.is_empty());
    assert!(out.is_ascii(), "{out}");
    assert!(!romanizer.profiles_loaded());
    assert!(romanizer.tokenizer_ready());
}

#[test]
fn generic_path_strips_ideographs() {
    let out = transliterate("赤い花");
    assert!(!out.trim().is_empty());
    assert!(out.is_ascii());
    assert!(!is_ideographic_text(&out));
}

#[test]
fn word_breaks_and_spacing() {
    assert_eq!(romanize("HelloWorld", &[]), "Hello World");
    assert_eq!(romanize("so   far", &[]), "so far");
    assert_eq!(strip_space_before("Hi !", &['!', '?', ':']), "Hi!");
}

#[test]
fn lyric_line_with_markup() {
    let sink_faults = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&sink_faults);
    let sink = move |fault: &Fault| recorded.lock().unwrap().push(fault.to_string());
    let romanizer = Romanizer::new().fault_sink(Arc::new(sink));

    let out = romanizer.romanize("[注]君の声<br>きっと届く!", &[]);
    assert!(out.is_ascii(), "{out}");
    assert!(out.starts_with('['));
    assert!(out.contains("<br>"));
    assert!(out.ends_with('!'));
    assert!(!out.contains(" !"));
    assert!(sink_faults.lock().unwrap().is_empty());
}

#[test]
fn embedded_tokenizer_segments_lyrics() {
    let tokenizer = LatticeTokenizer::builder().build().unwrap();
    let surfaces: Vec<String> = tokenizer
        .tokenize("東京の空<br>")
        .into_iter()
        .map(|t| t.surface)
        .collect();
    assert_eq!(surfaces, vec!["東京", "の", "空", "<", "br", ">"]);
}

#[test]
fn custom_sink_receives_tokenizer_fault() {
    struct Counting(Mutex<usize>);
    impl FaultSink for Counting {
        fn report(&self, fault: &Fault) {
            if matches!(fault, Fault::TokenizerUnavailable(_)) {
                *self.0.lock().unwrap() += 1;
            }
        }
    }

    let sink = Arc::new(Counting(Mutex::new(0)));
    let romanizer = Romanizer::with_builder(
        LatticeTokenizer::builder().dictionary_path("/nonexistent/lexicon.csv"),
    )
    .fault_sink(sink.clone());

    let out = romanizer.romanize("こんにちは", &[]);
    assert!(out.is_ascii());
    assert!(!out.is_empty());
    romanizer.romanize("こんにちは", &[]);
    assert_eq!(*sink.0.lock().unwrap(), 2);
}
