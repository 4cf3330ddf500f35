use std::io::{self, BufRead, BufWriter, Write};
use std::sync::Arc;

use tracing::debug;

use roma_core::fault::{Fault, FaultSink};
use roma_core::Romanizer;

use super::DictOptions;

/// Prints faults to stderr next to the romanized output.
struct StderrSink;

impl FaultSink for StderrSink {
    fn report(&self, fault: &Fault) {
        eprintln!("warning: {fault}");
    }
}

/// Romanize each text, or each stdin line when `texts` is empty.
/// `languages` are the ISO 639-1 codes detection chooses between.
pub fn romanize_cmd(texts: &[String], dict: &DictOptions, languages: &[String]) {
    let options = dict.clone();
    let romanizer = Romanizer::with_factory(Box::new(move || options.tokenizer()))
        .fault_sink(Arc::new(StderrSink));
    debug!(texts = texts.len(), languages = ?languages, "romanizing");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if texts.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = die!(line, "Error reading stdin: {}");
            die!(
                writeln!(out, "{}", romanizer.romanize(&line, languages)),
                "Error writing output: {}"
            );
        }
    } else {
        for text in texts {
            die!(
                writeln!(out, "{}", romanizer.romanize(text, languages)),
                "Error writing output: {}"
            );
        }
    }
    die!(out.flush(), "Error writing output: {}");
}

pub fn ideographic_cmd(text: &str) {
    let ideographic = roma_core::is_ideographic_text(text);
    println!("{ideographic}");
    if !ideographic {
        std::process::exit(1);
    }
}
