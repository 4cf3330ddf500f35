mod concurrency;
mod pipeline;

use std::sync::{Arc, Mutex};

use crate::fault::{Fault, FaultSink};
use crate::tokenizer::testutil::test_dict;
use crate::tokenizer::{LatticeTokenizer, Tokenizer};

use super::{Romanizer, TokenizerFactory};

/// Collects a short description of every reported fault.
#[derive(Default)]
struct RecordingSink {
    faults: Mutex<Vec<String>>,
}

impl RecordingSink {
    fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.faults.lock().unwrap())
    }
}

impl FaultSink for RecordingSink {
    fn report(&self, fault: &Fault) {
        let label = match fault {
            Fault::TokenizerUnavailable(_) => "tokenizer".to_string(),
            Fault::ReadingLookup { surface } => format!("reading:{surface}"),
        };
        self.faults.lock().unwrap().push(label);
    }
}

fn test_factory() -> TokenizerFactory {
    Box::new(|| {
        let tokenizer: Arc<dyn Tokenizer> = Arc::new(LatticeTokenizer::new(Arc::new(test_dict()), None));
        Ok(tokenizer)
    })
}

fn test_romanizer() -> (Romanizer, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let romanizer = Romanizer::with_factory(test_factory()).fault_sink(sink.clone());
    (romanizer, sink)
}

fn languages(codes: &[&str]) -> Vec<String> {
    codes.iter().map(|c| c.to_string()).collect()
}

/// The language set lyric lines are usually checked against.
fn lyric_languages() -> Vec<String> {
    languages(&["ja", "zh", "ko", "en"])
}
